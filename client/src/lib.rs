//! # client
//!
//! Leptos frontend for the single-page portfolio.
//!
//! This crate contains the page, its sections and shared components, the
//! theme and scroll-reveal state, and the contact API client. The server
//! crate renders it with SSR; the `hydrate` feature builds the WASM bundle.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod content;
pub mod net;
pub mod pages;
pub mod sections;
pub mod state;
pub mod util;

/// WASM entry point: attach to the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"console logger already initialized".into());
    }
    leptos::mount::hydrate_body(app::App);
}
