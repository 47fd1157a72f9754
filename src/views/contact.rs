use dioxus::prelude::*;

use crate::components::RevealSection;
use crate::content::{ CONTACT, FOOTER };
use crate::utils::links::{ mailto_href, tel_href };

const LINK_CLASS: &str = "text-blue-600 dark:text-blue-400";

#[component]
pub fn Contact() -> Element {
    rsx! {
        RevealSection {
            id: "contact",
            class: "max-w-6xl mx-auto p-6 py-12 text-center",
            h3 { class: "text-2xl font-bold mb-4", "Contact" }
            p {
                "📞 "
                a { href: tel_href(CONTACT.phone), "{CONTACT.phone}" }
                " · 📧 "
                a { href: mailto_href(CONTACT.email), "{CONTACT.email}" }
            }
            p { class: "mt-2", "🌍 {CONTACT.location}" }
            p {
                class: "mt-2",
                "🔗 "
                a { class: LINK_CLASS, href: CONTACT.github, "GitHub" }
                " · "
                a { class: LINK_CLASS, href: CONTACT.linkedin, "LinkedIn" }
            }
        }
    }
}

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer { class: "bg-gray-900 text-white text-center py-6", "{FOOTER}" }
    }
}
