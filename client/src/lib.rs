//! # client
//!
//! Leptos frontend for the LOANOS loan operations dashboard.
//!
//! This crate holds the loan data model, the static demo dataset, display
//! math, UI selector state, and the six workspace pages. It is compiled to
//! WASM for hydration (`hydrate`) and linked into the `loanos` server for
//! server-side rendering (`ssr`).

pub mod app;
pub mod components;
pub mod domain;
pub mod mock;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser diagnostics and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        web_sys::console::warn_1(&"console logger already installed".into());
    }
    log::info!("loanos hydrating");
    leptos::mount::hydrate_body(app::App);
}
