//! # landing-client
//!
//! Leptos + WASM landing page for the auth demo. Shows the signed-in user's
//! email and verification status with a logout button, or sign-in and
//! create-account links for visitors.
//!
//! Session state comes from an external backend through `util::auth`; this
//! crate never authenticates anyone itself.

pub mod app;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("hydrating landing page");
    leptos::mount::hydrate_body(app::App);
}
