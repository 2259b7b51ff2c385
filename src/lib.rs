/// Proxy Tabs - tabbed browsing over a web proxy
/// Built with Rust + WASM + Yew

pub mod address;
mod bridge;
pub mod error;
pub mod loader;
pub mod registry;
pub mod settings;
pub mod tab_data;
pub mod theme;
pub mod ui;

use wasm_bindgen::prelude::*;

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

// Re-export input formatting for JavaScript access
#[wasm_bindgen]
pub fn format_url(input: &str, search_template: &str) -> String {
    address::format_url(input, search_template)
}

// Start the Yew app, configured from the page's config element if present
#[wasm_bindgen]
pub fn start_app() {
    let config = ui::dom::read_config();
    log::info!("starting with {:?} layout", config.layout);
    yew::Renderer::<ui::app::App>::with_props(ui::app::AppProps { config }).render();
}
