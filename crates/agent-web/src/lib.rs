//! tutor-agent Web Frontend
//!
//! Leptos-based WASM invoke panel, served by the agent itself under `/ui`.

mod api;
mod app;
mod components;
mod pages;
mod state;

pub use app::App;

use wasm_bindgen::prelude::*;

/// WASM entry point
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
