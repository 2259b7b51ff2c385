use std::fmt;
use wasm_bindgen::JsValue;

/// Static message shown when a page cannot be loaded through the proxy
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load URL.";

// === ProxyError ===

/// Errors raised while preparing a proxied navigation.
#[derive(Debug, Clone, PartialEq)]
pub enum ProxyError {
    /// The proxy service worker could not be registered.
    ServiceWorker(String),
    /// Reading or switching the connection manager's transport failed.
    Transport(String),
    /// The proxy codec rejected the URL.
    Encoding(String),
    /// A value crossing the JavaScript bridge had an unexpected shape.
    Bridge(String),
}

impl fmt::Display for ProxyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProxyError::ServiceWorker(msg) => write!(f, "Service worker registration failed: {}", msg),
            ProxyError::Transport(msg) => write!(f, "Transport setup failed: {}", msg),
            ProxyError::Encoding(msg) => write!(f, "URL encoding failed: {}", msg),
            ProxyError::Bridge(msg) => write!(f, "Bridge error: {}", msg),
        }
    }
}

impl std::error::Error for ProxyError {}

/// Readable text of a thrown JavaScript value, like `String(err)` would give
pub fn js_error_text(value: &JsValue) -> String {
    if let Some(s) = value.as_string() {
        return s;
    }

    match js_sys::Reflect::get(value, &JsValue::from_str("message")).ok().and_then(|m| m.as_string()) {
        Some(message) => message,
        None => format!("{:?}", value),
    }
}

// === LoadFailure ===

/// What the error region shows after a failed navigation
#[derive(Debug, Clone, PartialEq)]
pub struct LoadFailure {
    pub message: String,
    pub detail: String,
}

impl From<&ProxyError> for LoadFailure {
    fn from(err: &ProxyError) -> Self {
        LoadFailure {
            message: LOAD_FAILED_MESSAGE.to_string(),
            detail: err.to_string(),
        }
    }
}
