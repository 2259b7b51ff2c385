/// Browser helpers: storage, document classes, location, config element

use crate::settings::{AppConfig, CONFIG_ELEMENT_ID, TransportConfig};
use crate::theme::{DARK_THEME_CLASS, THEME_STORAGE_KEY, Theme};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Element, HtmlImageElement, Storage};

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

pub fn stored_theme() -> Option<String> {
    local_storage()?.get_item(THEME_STORAGE_KEY).ok().flatten()
}

pub fn store_theme(theme: Theme) {
    let Some(storage) = local_storage() else {
        log::warn!("localStorage unavailable, theme not saved");
        return;
    };

    if let Err(e) = storage.set_item(THEME_STORAGE_KEY, theme.storage_value()) {
        log::warn!("Failed to save theme: {:?}", e);
    }
}

/// `<html>` and `<body>`, whichever exist
fn theme_roots() -> Vec<Element> {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return Vec::new();
    };

    let mut roots = Vec::with_capacity(2);
    roots.extend(document.document_element());
    roots.extend(document.body().map(Element::from));
    roots
}

/// Whether the page was already marked dark before the app started
pub fn document_is_dark() -> bool {
    theme_roots()
        .iter()
        .any(|el| el.class_list().contains(DARK_THEME_CLASS))
}

pub fn apply_theme_class(theme: Theme) {
    for el in theme_roots() {
        if let Err(e) = el.class_list().toggle_with_force(DARK_THEME_CLASS, theme.is_dark()) {
            log::warn!("Failed to toggle theme class: {:?}", e);
        }
    }
}

/// Load and decode an image, resolving to its source once it can be painted
pub async fn decode_image(src: &str) -> Result<String, JsValue> {
    let img = HtmlImageElement::new()?;
    img.set_src(src);
    JsFuture::from(img.decode()).await?;
    Ok(img.src())
}

/// Tunnelling endpoint on the host serving this page
pub fn tunnel_endpoint(transport: &TransportConfig) -> String {
    let location = web_sys::window().map(|w| w.location());
    let protocol = location
        .as_ref()
        .and_then(|l| l.protocol().ok())
        .unwrap_or_else(|| "http:".to_string());
    let host = location
        .as_ref()
        .and_then(|l| l.host().ok())
        .unwrap_or_else(|| "localhost".to_string());

    transport.tunnel_endpoint(&protocol, &host)
}

/// Read the JSON config element, falling back to defaults
pub fn read_config() -> AppConfig {
    let json = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());

    match json {
        Some(json) => AppConfig::from_json(&json).unwrap_or_else(|e| {
            log::warn!("{}, using defaults", e);
            AppConfig::default()
        }),
        None => AppConfig::default(),
    }
}
