//! # gokeral-web
//!
//! Leptos + WASM web client for the Gokeral ride-booking service.
//!
//! Riders and drivers register, sign in, browse their profile tabs, edit
//! personal information, and (riders) plan a driving route on a map. All
//! account data comes from the external authentication service; this crate
//! keeps only a local mirror of the signed-in user.
//!
//! `state` holds the pure data model and transitions, `net` the service
//! calls, `util` the browser glue, and `pages`/`components` the UI.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("logger already installed: {e}").into());
    }
    leptos::mount::mount_to_body(app::App);
}
