//! # photoblog-client
//!
//! Leptos + WASM frontend for the photography blog.
//!
//! This crate contains the application shell, components, session and modal
//! state, form validation, the async actions behind each form, and the REST
//! client for the hosted record backend. The `hydrate` feature builds the
//! browser bundle; `ssr` lets the host server render the same tree.

pub mod actions;
pub mod app;
pub mod components;
pub mod config;
pub mod forms;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs logging and hydrates the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
