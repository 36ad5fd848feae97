//! Claim-Micro-RAG Web Frontend
//!
//! Leptos-based WASM frontend showing the landing banner.

mod app;
mod components;
mod pages;

pub use app::App;
pub use components::{Banner, FeatureCard};

use wasm_bindgen::prelude::*;

/// WASM entry point
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
