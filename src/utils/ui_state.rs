//! Navigation and theme state owned by the top-level view.
//!
//! `UiState` is plain data: the view keeps it in a signal and calls the
//! transitions from its event handlers. The theme marker is derived from the
//! state, so it cannot drift from `theme`.

use crate::storage::ThemeStore;
use crate::utils::Theme;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct UiState {
    nav_open: bool,
    theme: Theme,
}

impl UiState {
    /// Initial state for a fresh mount. Reads the persisted theme once; a
    /// missing, malformed or unreadable value leaves the default in place.
    pub fn mount(store: &ThemeStore) -> Self {
        let theme = store.load().unwrap_or_default();
        log::debug!("mounted with theme {}", theme);
        Self {
            nav_open: false,
            theme,
        }
    }

    pub fn nav_open(&self) -> bool {
        self.nav_open
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn marker(&self) -> Option<&'static str> {
        self.theme.marker()
    }

    pub fn toggle_nav(&mut self) -> bool {
        self.nav_open = !self.nav_open;
        log::debug!("navigation panel open: {}", self.nav_open);
        self.nav_open
    }

    /// Flips the theme and writes it through to `store`.
    ///
    /// The in-memory theme is updated first and is kept even if the write
    /// fails; the failure is only logged.
    pub fn toggle_theme(&mut self, store: &ThemeStore) -> Theme {
        self.theme = self.theme.toggled();
        log::debug!("theme switched to {}", self.theme);
        if let Err(err) = store.save(self.theme) {
            log::warn!("Theme preference not persisted: {}", err);
        }
        self.theme
    }
}
