//! # assignment-portal
//!
//! Leptos + WASM frontend for the assignment submission and project tracking
//! portal.
//!
//! This crate contains pages, components, the persisted login session, the
//! namespaced `localStorage` wrapper, and the REST client for the auth
//! service. Browser builds enable the `csr` feature; native builds keep the
//! same logic testable with an in-memory store and `reqwest`.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic + console logging, then mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("console logger unavailable: {e}").into());
    }
    leptos::mount::mount_to_body(app::App);
}
