use dioxus::prelude::*;

use crate::components::RevealSection;
use crate::content::{ ACHIEVEMENTS, EDUCATION };

#[component]
fn TextList(items: &'static [&'static str]) -> Element {
    rsx! {
        ul {
            class: "list-disc pl-6 space-y-2 text-gray-700 dark:text-gray-300",
            for item in items {
                li { "{item}" }
            }
        }
    }
}

#[component]
pub fn Education() -> Element {
    rsx! {
        RevealSection {
            id: "education",
            class: "max-w-6xl mx-auto p-6 py-12",
            h3 { class: "text-2xl font-bold mb-6", "Education" }
            TextList { items: EDUCATION }
        }
    }
}

#[component]
pub fn Achievements() -> Element {
    rsx! {
        RevealSection {
            id: "achievements",
            class: "bg-gray-50 dark:bg-gray-800 py-12",
            div {
                class: "max-w-6xl mx-auto p-6",
                h3 { class: "text-2xl font-bold mb-4", "Achievements & Problem Solving" }
                TextList { items: ACHIEVEMENTS }
            }
        }
    }
}
