//! # aerocast-client
//!
//! Leptos + WASM frontend for the AeroCast passenger and operations portal.
//!
//! The crate is split into a framework-free core and a thin view layer:
//! `state::session` owns the authentication lifecycle and its persistence,
//! `routing` resolves paths against the route tree and decides whether a
//! view may render, and `components`/`pages` bind both into Leptos through
//! `state::context::AppContext`.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod routing;
pub mod state;
pub mod util;

/// Browser entry point.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger unavailable: {err}");
    }
    leptos::mount::mount_to_body(app::App);
}
