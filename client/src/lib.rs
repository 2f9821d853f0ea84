//! # client
//!
//! Leptos + WASM chat widget for Pizza Bot. Renders the transcript, sends
//! each message to the chat service, and caches the transcript in browser
//! storage.
//!
//! This crate contains the root app, the chat view component, chat state,
//! the messaging client, and the storage capability.

pub mod app;
pub mod components;
pub mod net;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
