//! Fade/slide-in wrappers.
//!
//! A `Motion` declares where content starts, how long it takes to settle and
//! what starts it. The wrappers only track whether they have been revealed;
//! the movement itself is a CSS transition on inline styles.

use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trigger {
    /// As soon as the element is mounted.
    Mount,
    /// The first time the element scrolls into view.
    InView,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Motion {
    pub from_x: i32,
    pub from_y: i32,
    pub duration_secs: f32,
    pub trigger: Trigger,
}

impl Motion {
    pub const SECTION: Motion = Motion { from_x: 0, from_y: 30, duration_secs: 0.6, trigger: Trigger::InView };
    pub const HERO_TEXT: Motion = Motion { from_x: -30, from_y: 0, duration_secs: 0.7, trigger: Trigger::Mount };
    pub const HERO_IMAGE: Motion = Motion { from_x: 30, from_y: 0, duration_secs: 0.7, trigger: Trigger::Mount };

    pub fn style(&self, revealed: bool) -> String {
        let (opacity, x, y) = if revealed { (1, 0, 0) } else { (0, self.from_x, self.from_y) };
        format!(
            "opacity: {opacity}; transform: translate({x}px, {y}px); \
             transition: opacity {d}s ease-out, transform {d}s ease-out;",
            d = self.duration_secs
        )
    }
}

fn start(evt: MountedEvent, trigger: Trigger, mut revealed: Signal<bool>) {
    if trigger == Trigger::Mount {
        revealed.set(true);
        return;
    }

    #[cfg(target_arch = "wasm32")]
    {
        if let Some(element) = evt.data().downcast::<web_sys::Element>() {
            match crate::utils::dom::observe_once(element, move || revealed.set(true)) {
                Ok(()) => {
                    return;
                }
                Err(err) => log::warn!("Cannot observe section, showing it now: {:?}", err),
            }
        }
    }

    let _ = evt;
    revealed.set(true);
}

#[component]
pub fn Reveal(motion: Motion, #[props(default, into)] class: String, children: Element) -> Element {
    let revealed = use_signal(|| false);

    rsx! {
        div {
            class: "{class}",
            style: motion.style(revealed()),
            onmounted: move |evt| start(evt, motion.trigger, revealed),
            {children}
        }
    }
}

/// An anchored page section that fades in the first time it is scrolled to.
#[component]
pub fn RevealSection(
    #[props(into)] id: String,
    #[props(default, into)] class: String,
    children: Element
) -> Element {
    let revealed = use_signal(|| false);
    let motion = Motion::SECTION;

    rsx! {
        section {
            id: "{id}",
            class: "{class}",
            style: motion.style(revealed()),
            onmounted: move |evt| start(evt, motion.trigger, revealed),
            {children}
        }
    }
}
