//! # invenza-ui
//!
//! Leptos + WASM frontend for the Invenza product-management UI.
//! Three screens: login, signup, and a static dashboard shell. Login and
//! signup validate locally and talk to a remote authentication service
//! over HTTP; everything else is presentation.
//!
//! Browser-only behavior (HTTP, timers, console logging) is gated behind
//! the `hydrate` feature so the pure form logic compiles and tests
//! natively with no features enabled.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod theme;
pub mod util;

/// WASM entry point: install the panic hook, wire console logging, and
/// hydrate the server-rendered document body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(crate::app::App);
}
