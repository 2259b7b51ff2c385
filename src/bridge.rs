/// JavaScript bridge to the external proxy stack
use crate::error::{ProxyError, js_error_text};
use crate::loader::{ProxyBackend, TunnelOption};
use wasm_bindgen::prelude::*;

// Import JS bridge functions
#[wasm_bindgen(module = "/bridge.js")]
extern "C" {
    fn connect(worker: &str);

    #[wasm_bindgen(catch)]
    async fn registerServiceWorker(path: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(catch)]
    async fn getTransport() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn setTransport(module: &str, options: JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(catch)]
    fn proxyPrefix() -> Result<String, JsValue>;

    #[wasm_bindgen(catch)]
    fn encodeUrl(url: &str) -> Result<String, JsValue>;
}

/// Proxy stack reached through `bridge.js`
pub struct JsBackend;

impl JsBackend {
    /// Open the connection manager backed by `worker`
    pub fn connect(worker: &str) -> JsBackend {
        connect(worker);
        JsBackend
    }
}

impl ProxyBackend for JsBackend {
    async fn register_service_worker(&self, path: &str) -> Result<(), ProxyError> {
        registerServiceWorker(path)
            .await
            .map_err(|e| ProxyError::ServiceWorker(js_error_text(&e)))
    }

    async fn current_transport(&self) -> Result<Option<String>, ProxyError> {
        let transport = getTransport()
            .await
            .map_err(|e| ProxyError::Transport(js_error_text(&e)))?;
        Ok(transport.as_string())
    }

    async fn set_transport(&self, module: &str, options: &[TunnelOption]) -> Result<(), ProxyError> {
        let options_js = serde_wasm_bindgen::to_value(options)
            .map_err(|e| ProxyError::Bridge(format!("Failed to serialize: {:?}", e)))?;

        setTransport(module, options_js)
            .await
            .map_err(|e| ProxyError::Transport(js_error_text(&e)))
    }

    fn prefix(&self) -> Result<String, ProxyError> {
        proxyPrefix().map_err(|e| ProxyError::Encoding(js_error_text(&e)))
    }

    fn encode_url(&self, url: &str) -> Result<String, ProxyError> {
        encodeUrl(url).map_err(|e| ProxyError::Encoding(js_error_text(&e)))
    }
}
