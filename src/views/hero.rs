use dioxus::prelude::*;

use crate::components::{ Button, ButtonVariant, Motion, Reveal };
use crate::content::{ CONTACT, HERO_ID, INTRO };

const HERO_SVG: Asset = asset!("/assets/hero.svg");

#[component]
pub fn Hero() -> Element {
    rsx! {
        section {
            id: HERO_ID,
            class: "min-h-screen flex items-center pt-20",
            div {
                class: "max-w-6xl mx-auto grid grid-cols-1 md:grid-cols-2 gap-8 items-center p-6",
                Reveal {
                    motion: Motion::HERO_TEXT,
                    h2 { class: "text-3xl md:text-5xl font-bold mb-3", "Hi, I’m {CONTACT.name}" }
                    p { class: "text-lg md:text-xl mb-4 text-gray-700 dark:text-gray-300", "{CONTACT.focus}" }
                    p { class: "mb-6 max-w-xl text-gray-600 dark:text-gray-300", "{INTRO}" }
                    div {
                        class: "flex flex-wrap gap-3",
                        a {
                            href: CONTACT.resume,
                            target: "_blank",
                            download: "",
                            Button { "Resume" }
                        }
                        a {
                            href: CONTACT.github,
                            target: "_blank",
                            rel: "noreferrer",
                            Button { variant: ButtonVariant::Outline, "GitHub" }
                        }
                        a {
                            href: CONTACT.linkedin,
                            target: "_blank",
                            rel: "noreferrer",
                            Button { variant: "outline", "LinkedIn" }
                        }
                    }
                    div {
                        class: "mt-6 text-sm text-gray-500 dark:text-gray-400",
                        "📍 {CONTACT.location} · 📧 {CONTACT.email} · 📞 {CONTACT.phone}"
                    }
                }
                Reveal {
                    motion: Motion::HERO_IMAGE,
                    class: "flex justify-center",
                    img {
                        src: HERO_SVG,
                        alt: "Hero illustration",
                        class: "hero-img rounded-lg shadow-lg",
                    }
                }
            }
        }
    }
}
