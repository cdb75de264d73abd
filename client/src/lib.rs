//! # blog-client
//!
//! Leptos frontend for the blog application: login and signup forms, a
//! session-aware navbar, and the blog listing page with search, category
//! filter, inline edit and delete against the remote blog REST API.
//!
//! The crate is compiled twice. With `hydrate` it is the browser bundle;
//! with `ssr` it is linked into `blog-server`, which renders pages and runs
//! the listing page's initial fetch.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(test)]
mod test_support;

/// Browser entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
