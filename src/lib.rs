//! # inventory-ui
//!
//! Leptos + WASM frontend for an inventory management API: product and
//! category CRUD, filtering, two-level sorting, pagination, and per-category
//! stock metrics.
//!
//! This crate contains pages, components, application state, wire types, and
//! the REST api layer. All data lives behind the external `/api` endpoints;
//! browser I/O is gated behind the `hydrate` feature so server renders stay
//! side-effect free.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs the panic hook, wires console logging, and
/// hydrates the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(App);
}
