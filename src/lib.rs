//! # openport-client
//!
//! Leptos + WASM frontend for the OpenPort survey platform.
//!
//! This crate contains pages, components, application state, and the REST
//! client for the remote survey API. Administrators manage surveys,
//! questions, responses, and analytics; respondents reach a single public
//! participation page through a tokenized link. All persistence and
//! aggregation happen server-side; this crate is presentation and transport.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
