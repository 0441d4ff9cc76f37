//! # bookswap-client
//!
//! Leptos + WASM browser client for the Digital Book Swap service. Visitors
//! browse the shared catalog; signed-in owners list, edit, lend out and
//! remove their own books through the service's REST API.
//!
//! Session, routing, pagination and notice logic live in plain structs under
//! `state` and `util` so they are unit-tested natively; the `csr` feature adds
//! the browser bindings and the mount entry point.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(test)]
mod test_support;

#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already installed: {e}");
    }
    leptos::mount::mount_to_body(app::App);
}
