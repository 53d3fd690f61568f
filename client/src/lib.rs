//! # client
//!
//! Leptos + WASM frontend for the VetCare patient-record application.
//!
//! This crate contains pages, components, form validation, application
//! state, and the REST client for the records API. The root `vetcare`
//! crate renders it with SSR and serves the hydrated bundle.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod forms;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs panic/log hooks and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
