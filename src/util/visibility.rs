//! Page visibility hook.
//!
//! Requires a browser environment; SSR and native builds register nothing.

/// Call `on_change(hidden)` whenever the document visibility changes.
///
/// The listener lives for the rest of the page.
pub fn on_visibility_change(on_change: impl Fn(bool) + 'static) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let doc = document.clone();
        let cb = Closure::<dyn FnMut(web_sys::Event)>::new(move |_ev: web_sys::Event| {
            on_change(doc.hidden());
        });
        if document
            .add_event_listener_with_callback("visibilitychange", cb.as_ref().unchecked_ref())
            .is_err()
        {
            leptos::logging::warn!("visibilitychange listener registration failed");
            return;
        }
        cb.forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = on_change;
    }
}
