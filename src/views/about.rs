use dioxus::prelude::*;

use crate::components::{ Card, RevealSection };
use crate::content::{ ABOUT, ABOUT_HIGHLIGHTS };

#[component]
pub fn About() -> Element {
    rsx! {
        RevealSection {
            id: "about",
            class: "max-w-4xl mx-auto p-6 py-12",
            h3 { class: "text-2xl font-bold mb-4", "About Me" }
            p { class: "text-gray-700 dark:text-gray-300", "{ABOUT}" }
            div {
                class: "mt-6 grid grid-cols-1 md:grid-cols-3 gap-4",
                for highlight in ABOUT_HIGHLIGHTS {
                    Card {
                        key: "{highlight.title}",
                        div {
                            class: "p-4",
                            h4 { class: "font-semibold", "{highlight.title}" }
                            ul {
                                class: "list-disc pl-5 mt-2",
                                for item in highlight.items {
                                    li { "{item}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
