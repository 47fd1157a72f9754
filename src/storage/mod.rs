//! Durable key-value storage for the theme preference.
//!
//! Backends mirror the browser `Storage` API (`get_item` / `set_item`).
//! `ThemeStore` narrows that to the one `"theme"` slot and decides what a
//! missing or bad value means.

#[cfg(target_arch = "wasm32")]
mod browser;
#[cfg(not(target_arch = "wasm32"))]
mod file;
mod memory;

use std::rc::Rc;

use crate::configs::AppConfig;
use crate::error::StorageError;
use crate::utils::Theme;

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserStorage;
#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStorage;
pub use memory::MemoryStorage;

pub const THEME_KEY: &str = "theme";

pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

#[derive(Clone)]
pub struct ThemeStore {
    backend: Rc<dyn KeyValueStore>,
}

impl ThemeStore {
    pub fn new(backend: Rc<dyn KeyValueStore>) -> Self {
        Self { backend }
    }

    /// Persisted preference, or `None` when there is no usable override.
    pub fn load(&self) -> Option<Theme> {
        match self.backend.get_item(THEME_KEY) {
            Ok(Some(raw)) =>
                match raw.parse::<Theme>() {
                    Ok(theme) => Some(theme),
                    Err(err) => {
                        log::warn!("Ignoring stored theme: {}", err);
                        None
                    }
                }
            Ok(None) => None,
            Err(err) => {
                log::warn!("Theme preference unavailable: {}", err);
                None
            }
        }
    }

    pub fn save(&self, theme: Theme) -> Result<(), StorageError> {
        self.backend.set_item(THEME_KEY, theme.as_str())
    }
}

/// Backend for the current platform. Falls back to session-only memory when
/// the durable store cannot be opened.
pub fn default_backend(config: &AppConfig) -> Rc<dyn KeyValueStore> {
    #[cfg(target_arch = "wasm32")]
    {
        let _ = config;
        match BrowserStorage::open() {
            Ok(storage) => Rc::new(storage),
            Err(err) => {
                log::warn!("{}; theme changes will last for this session only", err);
                Rc::new(MemoryStorage::new())
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        log::info!("Storing preferences in {}", config.settings_path.display());
        Rc::new(FileStorage::new(config.settings_path.clone()))
    }
}
