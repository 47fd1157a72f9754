use dioxus::prelude::*;

use crate::utils::UiState;
use super::{ About, Achievements, Contact, Education, Experience, Footer, Hero, Navbar, Projects, Skills };

const ROOT_CLASS: &str =
    "font-sans text-gray-900 dark:text-gray-100 min-h-screen bg-white dark:bg-gray-900 transition-colors";

/// Class list for the page root: the fixed layout classes plus the theme marker.
pub fn root_class(state: &UiState) -> String {
    match state.marker() {
        Some(marker) => format!("{} {}", marker, ROOT_CLASS),
        None => ROOT_CLASS.to_string(),
    }
}

/// The whole page for a given state. Reads nothing but its props.
#[component]
pub fn PortfolioPage(
    state: UiState,
    on_toggle_nav: EventHandler<MouseEvent>,
    on_toggle_theme: EventHandler<MouseEvent>
) -> Element {
    rsx! {
        div {
            class: root_class(&state),
            Navbar { state: state, on_toggle_nav: on_toggle_nav, on_toggle_theme: on_toggle_theme }
            main {
                Hero {}
                About {}
                Skills {}
                Experience {}
                Projects {}
                Education {}
                Achievements {}
                Contact {}
            }
            Footer {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;
    use crate::storage::{ MemoryStorage, ThemeStore };

    #[test]
    fn test_root_class_carries_marker_only_when_dark() {
        let store = ThemeStore::new(Rc::new(MemoryStorage::new()));
        let mut state = UiState::mount(&store);
        assert!(root_class(&state).split_whitespace().any(|c| c == "dark"));

        state.toggle_theme(&store);
        assert!(!root_class(&state).split_whitespace().any(|c| c == "dark"));
        assert!(root_class(&state).contains("dark:bg-gray-900"));
    }
}
