//! Reactive client for the quant strategy backend.
//!
//! ARCHITECTURE
//! ============
//! `state` holds the cached strategy collection and pending flags, `net`
//! pairs each REST call with its state transition, `pages` owns screen
//! orchestration, and `components` render cached state. Control flow is
//! one-way: store operation -> HTTP -> state mutation -> view. The server
//! behind `/api/v1/quant` is the only source of truth; everything cached
//! here is treated as possibly stale until a refetch confirms it.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// Wasm entry point: hydrate the server-rendered shell in the browser.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
