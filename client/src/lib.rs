//! # activities-client
//!
//! Leptos + WASM frontend for the activity sign-up board.
//!
//! The page fetches the activity roster from the backend, renders one card
//! per activity plus a selector, and submits sign-up and unregister
//! requests. Browser-only behavior sits behind the `hydrate` feature; the
//! `ssr` feature renders the page shell on the server.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
