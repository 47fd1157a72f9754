use dioxus::prelude::*;

use crate::components::RevealSection;
use crate::content::SKILLS;

#[component]
pub fn Skills() -> Element {
    rsx! {
        RevealSection {
            id: "skills",
            class: "bg-gray-50 dark:bg-gray-800 py-12",
            div {
                class: "max-w-6xl mx-auto p-6",
                h3 { class: "text-2xl font-bold mb-6", "Skills" }
                div {
                    class: "grid grid-cols-2 sm:grid-cols-3 md:grid-cols-4 gap-4",
                    for skill in SKILLS {
                        div {
                            key: "{skill.name}",
                            class: "skill-tile flex items-center gap-3 p-3 bg-white dark:bg-gray-700 rounded-lg shadow-sm border",
                            div { class: "text-2xl text-blue-600 dark:text-blue-400", "{skill.glyph}" }
                            div { class: "font-medium", "{skill.name}" }
                        }
                    }
                }
            }
        }
    }
}
