use dioxus::prelude::*;

use crate::content::{ CONTACT, SECTIONS };
use crate::utils::links::anchor_href;
use crate::utils::UiState;

const LINK_CLASS: &str = "hover:text-blue-600 dark:hover:text-blue-400";

#[component]
fn SectionLinks() -> Element {
    rsx! {
        for section in SECTIONS {
            a {
                key: "{section.id}",
                href: anchor_href(section.id),
                class: LINK_CLASS,
                "{section.label}"
            }
        }
    }
}

#[component]
fn ThemeToggle(
    state: UiState,
    #[props(into)] class: String,
    on_toggle: EventHandler<MouseEvent>
) -> Element {
    let title = format!("Switch to {} mode", state.theme().toggled());

    rsx! {
        button {
            class: "{class}",
            aria_label: "Toggle theme",
            title: "{title}",
            onclick: move |evt| on_toggle.call(evt),
            {state.theme().toggle_icon()}
        }
    }
}

/// Fixed top bar. Only the menu button opens and closes the mobile panel.
#[component(no_case_check)]
pub fn Navbar(
    state: UiState,
    on_toggle_nav: EventHandler<MouseEvent>,
    on_toggle_theme: EventHandler<MouseEvent>
) -> Element {
    rsx! {
        nav {
            class: "fixed top-0 left-0 w-full bg-white/80 dark:bg-gray-800/80 backdrop-blur z-50",
            div {
                id: "navbar",
                class: "max-w-6xl mx-auto flex justify-between items-center p-4",
                div {
                    class: "flex items-center gap-3",
                    h1 { class: "text-lg md:text-xl font-bold", "{CONTACT.name}" }
                    span { class: "text-sm text-gray-500 dark:text-gray-400", "{CONTACT.headline}" }
                }
                div {
                    class: "hidden md:flex items-center gap-6",
                    SectionLinks {}
                    ThemeToggle {
                        state: state,
                        class: "p-2 rounded-md hover:bg-gray-100 dark:hover:bg-gray-700",
                        on_toggle: on_toggle_theme,
                    }
                }
                button {
                    class: "md:hidden text-xl",
                    aria_label: "Toggle navigation",
                    aria_expanded: state.nav_open().to_string(),
                    onclick: move |evt| on_toggle_nav.call(evt),
                    "☰"
                }
            }
            if state.nav_open() {
                div {
                    id: "mobile-nav",
                    class: "md:hidden flex flex-col space-y-2 p-4 bg-white dark:bg-gray-800 border-t",
                    SectionLinks {}
                    div {
                        class: "pt-2",
                        ThemeToggle {
                            state: state,
                            class: "p-2 rounded-md",
                            on_toggle: on_toggle_theme,
                        }
                    }
                }
            }
        }
    }
}
