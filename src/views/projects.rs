use dioxus::prelude::*;

use crate::components::{ Card, RevealSection };
use crate::content::{ ProjectLink, PROJECTS };

#[component]
pub fn Projects() -> Element {
    rsx! {
        RevealSection {
            id: "projects",
            class: "bg-gray-50 dark:bg-gray-800 py-12",
            div {
                class: "max-w-6xl mx-auto p-6",
                h3 { class: "text-2xl font-bold mb-6", "Projects" }
                div {
                    class: "grid md:grid-cols-3 gap-6",
                    for project in PROJECTS {
                        Card {
                            key: "{project.name}",
                            div {
                                class: "p-4",
                                h4 { class: "font-bold", "{project.name}" }
                                p { class: "text-gray-600 dark:text-gray-300", "{project.summary}" }
                                div {
                                    class: "mt-3 flex gap-2",
                                    {match project.link {
                                        ProjectLink::Private => rsx! {
                                            span { class: "text-sm underline", "Private repo" }
                                        },
                                        ProjectLink::Public { label, url } => rsx! {
                                            a {
                                                href: url,
                                                target: "_blank",
                                                rel: "noreferrer",
                                                class: "text-sm underline",
                                                "{label}"
                                            }
                                        },
                                    }}
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
