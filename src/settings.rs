/// Application configuration
use serde::{Deserialize, Serialize};

/// Id of the optional `<script type="application/json">` element holding the config
pub const CONFIG_ELEMENT_ID: &str = "proxy-tabs-config";

/// Which of the two page layouts to render
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Vertical tab strip with an always visible address bar
    #[default]
    Sidebar,
    /// Horizontal tab strip; the address bar lives on a start page shown for empty tabs
    Homepage,
}

impl Layout {
    /// Preset used when the configuration names no search template
    pub fn default_search_engine(self) -> SearchEngine {
        match self {
            Layout::Sidebar => SearchEngine::DuckDuckGo,
            Layout::Homepage => SearchEngine::Google,
        }
    }

    /// Whether the address bar is visible given whether the active tab has a URL.
    /// `None` means there is no active tab.
    pub fn shows_address_bar(self, active_has_url: Option<bool>) -> bool {
        match self {
            Layout::Sidebar => true,
            Layout::Homepage => !active_has_url.unwrap_or(false),
        }
    }
}

/// Search engine presets offered in the address form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchEngine {
    DuckDuckGo,
    Google,
    Bing,
    Brave,
}

impl SearchEngine {
    pub const ALL: [SearchEngine; 4] = [
        SearchEngine::DuckDuckGo,
        SearchEngine::Google,
        SearchEngine::Bing,
        SearchEngine::Brave,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SearchEngine::DuckDuckGo => "DuckDuckGo",
            SearchEngine::Google => "Google",
            SearchEngine::Bing => "Bing",
            SearchEngine::Brave => "Brave",
        }
    }

    /// Query template; `%s` is replaced with the encoded query
    pub fn template(self) -> &'static str {
        match self {
            SearchEngine::DuckDuckGo => "https://duckduckgo.com/?q=%s",
            SearchEngine::Google => "https://www.google.com/search?q=%s",
            SearchEngine::Bing => "https://www.bing.com/search?q=%s",
            SearchEngine::Brave => "https://search.brave.com/search?q=%s",
        }
    }
}

/// Paths of the external proxy stack, all relative to the page origin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TransportConfig {
    /// Module the connection manager should load as its transport
    pub module: String,
    /// Path of the WebSocket tunnelling endpoint
    pub tunnel_path: String,
    /// Worker script backing the connection manager
    pub worker: String,
    /// Proxy service worker script
    pub service_worker: String,
}

impl Default for TransportConfig {
    fn default() -> Self {
        TransportConfig {
            module: "/epoxy/index.mjs".to_string(),
            tunnel_path: "/wisp/".to_string(),
            worker: "/baremux/worker.js".to_string(),
            service_worker: "/sw.js".to_string(),
        }
    }
}

impl TransportConfig {
    /// WebSocket URL of the tunnelling endpoint for a page served with
    /// `protocol` (e.g. `"https:"`) from `host`.
    pub fn tunnel_endpoint(&self, protocol: &str, host: &str) -> String {
        let scheme = if protocol == "https:" { "wss" } else { "ws" };
        let path = if self.tunnel_path.starts_with('/') {
            self.tunnel_path.clone()
        } else {
            format!("/{}", self.tunnel_path)
        };
        format!("{}://{}{}", scheme, host, path)
    }
}

/// Root configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    pub layout: Layout,
    /// Custom `%s` search template, overriding the layout's preset
    pub search_template: Option<String>,
    pub transport: TransportConfig,
}

impl AppConfig {
    /// Parse a JSON config; absent fields take their defaults
    pub fn from_json(json: &str) -> Result<AppConfig, String> {
        serde_json::from_str(json).map_err(|e| format!("Invalid config: {}", e))
    }

    /// Search template the address form starts with
    pub fn initial_search_template(&self) -> String {
        self.search_template
            .clone()
            .filter(|t| t.contains("%s"))
            .unwrap_or_else(|| self.layout.default_search_engine().template().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();

        assert_eq!(config.layout, Layout::Sidebar);
        assert_eq!(config.transport.module, "/epoxy/index.mjs");
        assert_eq!(config.transport.tunnel_path, "/wisp/");
        assert_eq!(config.initial_search_template(), "https://duckduckgo.com/?q=%s");
    }

    #[test]
    fn test_from_json_partial() {
        let config = AppConfig::from_json(r#"{"layout":"homepage","transport":{"tunnelPath":"/tunnel/"}}"#)
            .unwrap();

        assert_eq!(config.layout, Layout::Homepage);
        assert_eq!(config.transport.tunnel_path, "/tunnel/");
        assert_eq!(config.transport.worker, "/baremux/worker.js");
        assert_eq!(config.initial_search_template(), "https://www.google.com/search?q=%s");
    }

    #[test]
    fn test_from_json_invalid() {
        assert!(AppConfig::from_json("{layout:").is_err());
        assert!(AppConfig::from_json(r#"{"layout":"floating"}"#).is_err());
    }

    #[test]
    fn test_custom_search_template() {
        let mut config = AppConfig::default();
        config.search_template = Some("https://search.example/?query=%s".to_string());
        assert_eq!(config.initial_search_template(), "https://search.example/?query=%s");

        // templates without a placeholder are ignored
        config.search_template = Some("https://search.example/".to_string());
        assert_eq!(config.initial_search_template(), "https://duckduckgo.com/?q=%s");
    }

    #[test]
    fn test_tunnel_endpoint() {
        let transport = TransportConfig::default();

        assert_eq!(transport.tunnel_endpoint("https:", "proxy.example:8443"), "wss://proxy.example:8443/wisp/");
        assert_eq!(transport.tunnel_endpoint("http:", "localhost:8080"), "ws://localhost:8080/wisp/");
    }

    #[test]
    fn test_tunnel_endpoint_relative_path() {
        let transport = TransportConfig {
            tunnel_path: "wisp/".to_string(),
            ..TransportConfig::default()
        };

        assert_eq!(transport.tunnel_endpoint("http:", "host"), "ws://host/wisp/");
    }

    #[test]
    fn test_address_bar_visibility() {
        assert!(Layout::Sidebar.shows_address_bar(Some(true)));
        assert!(Layout::Sidebar.shows_address_bar(None));
        assert!(Layout::Homepage.shows_address_bar(None));
        assert!(Layout::Homepage.shows_address_bar(Some(false)));
        assert!(!Layout::Homepage.shows_address_bar(Some(true)));
    }
}
