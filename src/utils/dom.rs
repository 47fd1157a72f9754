//! Browser document glue. Outside wasm32 these are no-ops: the page root
//! element already carries the marker class.

use crate::utils::DARK_MARKER;

#[cfg(target_arch = "wasm32")]
pub fn apply_marker(marker: Option<&str>) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        log::warn!("No document root to apply the theme marker to");
        return;
    };

    let classes = root.class_list();
    let result = match marker {
        Some(class) => classes.add_1(class),
        None => classes.remove_1(DARK_MARKER),
    };
    if let Err(err) = result {
        log::warn!("Failed to update document theme marker: {:?}", err);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn apply_marker(marker: Option<&str>) {
    log::trace!("theme marker {:?} (default {})", marker, DARK_MARKER);
}

/// Calls `on_visible` the first time `element` intersects the viewport, then
/// stops observing.
#[cfg(target_arch = "wasm32")]
pub fn observe_once(
    element: &web_sys::Element,
    on_visible: impl FnOnce() + 'static
) -> Result<(), wasm_bindgen::JsValue> {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{ JsCast, JsValue };
    use web_sys::{ IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit };

    let mut on_visible = Some(on_visible);
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            let visible = entries
                .iter()
                .any(|entry| entry.unchecked_into::<IntersectionObserverEntry>().is_intersecting());
            if visible {
                observer.disconnect();
                if let Some(f) = on_visible.take() {
                    f();
                }
            }
        }
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(0.1));
    let observer = IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &options
    )?;
    observer.observe(element);
    // the observer owns the callback for the rest of the page's life
    callback.forget();
    Ok(())
}
