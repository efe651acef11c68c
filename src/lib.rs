//! # companion-client
//!
//! Leptos + WASM chat client for the AI companion service.
//!
//! The crate holds the page shell, the components, the session state and the
//! `ChatSession` controller that drives the `/chat`, `/memory`, `/world` and
//! `/adventure` endpoints. Speech recognition, speech synthesis and audio
//! cues sit behind the traits in `platform` so the controller runs unchanged
//! in the browser and in native tests.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod platform;
pub mod session;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already initialized: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
