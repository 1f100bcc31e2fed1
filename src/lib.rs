//! # autolens
//!
//! Leptos + WASM frontend for the Car Analysis AI service. Users submit an
//! image for one of two AI-backed inspections (white-pixel concentration or
//! car-bonnet condition), view the structured result, and browse past
//! analyses.
//!
//! This crate contains pages, components, application state, and the HTTP
//! client for the analysis backend. All durable state lives behind the API
//! boundary; everything here is transient, per-session UI state.
//!
//! Browser-only dependencies are gated behind the `csr` feature so the state
//! machines and wire types compile and test natively.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install the panic hook, wire `log` to the browser
/// console, and mount the application.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
