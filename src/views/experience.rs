use dioxus::prelude::*;

use crate::components::{ Card, RevealSection };
use crate::content::{ Role, EXPERIENCE };

#[component]
fn RoleCard(role: Role) -> Element {
    let heading = role.heading();
    let period = role.period.label();

    rsx! {
        Card {
            div {
                class: "p-4",
                h4 { class: "font-bold", "{heading}" }
                p { class: "text-sm text-gray-600 dark:text-gray-400", "{period}" }
                ul {
                    class: "list-disc pl-6 mt-2 space-y-1 text-gray-700 dark:text-gray-300",
                    for line in role.highlights {
                        li { "{line}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Experience() -> Element {
    rsx! {
        RevealSection {
            id: "experience",
            class: "max-w-6xl mx-auto p-6 py-12",
            h3 { class: "text-2xl font-bold mb-6", "Experience" }
            div {
                class: "space-y-6",
                for role in EXPERIENCE {
                    RoleCard { key: "{role.title}", role: *role }
                }
            }
        }
    }
}
