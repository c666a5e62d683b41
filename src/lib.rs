/// Leads Tracker - Chrome Extension for saving leads
/// Built with Rust + WASM + Yew

pub mod config;
pub mod debounce;
pub mod domain;
pub mod error;
pub mod intake;
pub mod lead;
pub mod search;
pub mod storage;
pub mod ui;
pub mod view;

use wasm_bindgen::prelude::*;

// Set up panic hook and console logging
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(config::log_level()));
}

// Start the Yew app for the popup
#[wasm_bindgen]
pub fn start_popup() {
    yew::Renderer::<ui::popup::App>::new().render();
}
