//! # client
//!
//! Leptos + WASM frontend for the movie poster browser.
//!
//! The interesting part is `state`: the page cursor, display list, viewport
//! trigger and the poster board controller that ties them together. They are
//! plain structs so the loading rules can be tested without a browser.
//! `components` and `pages` render that state; `net` talks to the server's
//! catalog proxy.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    // Fails only if a logger is already installed.
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
