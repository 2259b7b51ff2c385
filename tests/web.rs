//! Browser tests, run with `wasm-pack test --headless --firefox`
#![cfg(target_arch = "wasm32")]

use proxy_tabs::settings::{AppConfig, TransportConfig};
use proxy_tabs::theme::Theme;
use proxy_tabs::ui::dom;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_theme_is_persisted() {
    dom::store_theme(Theme::Dark);
    assert_eq!(dom::stored_theme().as_deref(), Some("dark"));

    dom::store_theme(Theme::Light);
    assert_eq!(dom::stored_theme().as_deref(), Some("light"));
}

#[wasm_bindgen_test]
fn test_theme_class_toggles() {
    dom::apply_theme_class(Theme::Dark);
    assert!(dom::document_is_dark());

    dom::apply_theme_class(Theme::Light);
    assert!(!dom::document_is_dark());
}

#[wasm_bindgen_test]
fn test_tunnel_endpoint_uses_page_host() {
    let endpoint = dom::tunnel_endpoint(&TransportConfig::default());

    assert!(endpoint.starts_with("ws://") || endpoint.starts_with("wss://"));
    assert!(endpoint.ends_with("/wisp/"));
}

#[wasm_bindgen_test]
fn test_config_defaults_without_element() {
    assert_eq!(dom::read_config(), AppConfig::default());
}

#[wasm_bindgen_test]
fn test_format_url_export() {
    assert_eq!(
        proxy_tabs::format_url("https://example.com", "https://duckduckgo.com/?q=%s"),
        "https://example.com/"
    );
}
