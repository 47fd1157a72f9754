use dioxus::prelude::*;

pub const CARD_CLASS: &str =
    "border rounded-lg bg-white dark:bg-gray-700 shadow-sm dark:border-gray-600";

#[component]
pub fn Card(children: Element) -> Element {
    rsx! {
        div { class: CARD_CLASS, {children} }
    }
}
