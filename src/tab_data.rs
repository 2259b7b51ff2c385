/// Data structures for proxy tabs
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Label shown for a tab that has not been pointed anywhere yet
pub const NEW_TAB_LABEL: &str = "New Tab";

/// Unique identifier of a tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TabId(Uuid);

impl TabId {
    pub fn new() -> TabId {
        TabId(Uuid::new_v4())
    }
}

impl Default for TabId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single tab and the navigation it last requested
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tab {
    pub id: TabId,
    pub label: String,
    pub url: Option<String>,
    /// Bumped on every navigation request, so submitting the same input twice reloads.
    pub revision: u32,
}

impl Tab {
    pub fn new(url: Option<String>) -> Tab {
        let label = url.as_deref().map_or_else(|| NEW_TAB_LABEL.to_string(), tab_label);
        let revision = if url.is_some() { 1 } else { 0 };

        Tab {
            id: TabId::new(),
            label,
            url,
            revision,
        }
    }

    /// Record a new navigation request for this tab
    pub fn request(&mut self, input: String) {
        self.label = tab_label(&input);
        self.url = Some(input);
        self.revision = self.revision.wrapping_add(1);
    }
}

/// Label for a tab showing `input`: the hostname when the input parses as a URL
/// with a host, otherwise the raw input.
pub fn tab_label(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return NEW_TAB_LABEL.to_string();
    }

    url::Url::parse(trimmed)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
        .unwrap_or_else(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_creation_without_url() {
        let tab = Tab::new(None);

        assert_eq!(tab.label, NEW_TAB_LABEL);
        assert_eq!(tab.url, None);
        assert_eq!(tab.revision, 0);
    }

    #[test]
    fn test_tab_creation_with_url() {
        let tab = Tab::new(Some("https://www.example.com/path".to_string()));

        assert_eq!(tab.label, "www.example.com");
        assert_eq!(tab.url.as_deref(), Some("https://www.example.com/path"));
        assert_eq!(tab.revision, 1);
    }

    #[test]
    fn test_ids_are_unique() {
        let a = Tab::new(None);
        let b = Tab::new(None);

        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_request_bumps_revision() {
        let mut tab = Tab::new(None);
        tab.request("https://github.com/rust-lang".to_string());
        tab.request("https://github.com/rust-lang".to_string());

        assert_eq!(tab.label, "github.com");
        assert_eq!(tab.revision, 2);
    }

    #[test]
    fn test_tab_label() {
        assert_eq!(tab_label("https://news.bbc.co.uk/article"), "news.bbc.co.uk");
        assert_eq!(tab_label("rust borrow checker"), "rust borrow checker");
        assert_eq!(tab_label("   "), NEW_TAB_LABEL);
    }

    #[test]
    fn test_serialization() {
        let tab = Tab::new(Some("https://example.com".to_string()));

        let json = serde_json::to_string(&tab).unwrap();
        let deserialized: Tab = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized, tab);
    }
}
