//! # rtc-client
//!
//! Leptos + WASM frontend for the Right Tech Centre online education
//! platform. Replaces the React SPA with a Rust-native UI layer.
//!
//! This crate contains pages, components, the session context that owns
//! authentication state, and the HTTP layer that attaches the current
//! bearer token to every outbound request.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod session;
pub mod util;

/// WASM entrypoint: hydrates the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
