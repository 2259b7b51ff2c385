/// Tab registry: the ordered set of open tabs and the active selection
use crate::tab_data::{Tab, TabId};
use std::rc::Rc;
use yew::functional::Reducible;

/// Insertion-ordered tabs plus the id of the active one.
///
/// Whenever `tabs` is non-empty exactly one tab is active; when it is empty
/// nothing is.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TabRegistry {
    tabs: Vec<Tab>,
    active: Option<TabId>,
}

impl TabRegistry {
    pub fn new() -> Self {
        TabRegistry {
            tabs: Vec::new(),
            active: None,
        }
    }

    /// Append a new tab, make it active and return its id
    pub fn create_tab(&mut self, url: Option<String>) -> TabId {
        let tab = Tab::new(url);
        let id = tab.id;
        log::debug!("creating tab {} ({})", id, tab.label);

        self.tabs.push(tab);
        self.active = Some(id);
        id
    }

    /// Make `id` the active tab. Unknown ids are ignored.
    pub fn switch_tab(&mut self, id: TabId) -> bool {
        if self.get(id).is_none() {
            log::debug!("switch to unknown tab {} ignored", id);
            return false;
        }

        self.active = Some(id);
        true
    }

    /// Remove a tab. When it was the active one, the last remaining tab takes
    /// over, or the selection clears if none remain.
    pub fn close_tab(&mut self, id: TabId) -> bool {
        let Some(index) = self.position(id) else {
            log::debug!("close of unknown tab {} ignored", id);
            return false;
        };

        self.tabs.remove(index);
        if self.active == Some(id) {
            self.active = self.tabs.last().map(|t| t.id);
        }

        log::debug!("closed tab {}, {} remaining", id, self.tabs.len());
        true
    }

    /// Record a navigation request on a tab
    pub fn navigate(&mut self, id: TabId, input: String) -> bool {
        match self.tabs.iter_mut().find(|t| t.id == id) {
            Some(tab) => {
                tab.request(input);
                true
            }
            None => false,
        }
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn active_id(&self) -> Option<TabId> {
        self.active
    }

    pub fn active(&self) -> Option<&Tab> {
        self.active.and_then(|id| self.get(id))
    }

    pub fn get(&self, id: TabId) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.id == id)
    }

    fn position(&self, id: TabId) -> Option<usize> {
        self.tabs.iter().position(|t| t.id == id)
    }
}

/// Mutations the UI can dispatch against the registry
#[derive(Debug, Clone, PartialEq)]
pub enum TabAction {
    Create(Option<String>),
    Switch(TabId),
    Close(TabId),
    Navigate(TabId, String),
}

impl Reducible for TabRegistry {
    type Action = TabAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();

        let changed = match action {
            TabAction::Create(url) => {
                next.create_tab(url);
                true
            }
            TabAction::Switch(id) => next.active != Some(id) && next.switch_tab(id),
            TabAction::Close(id) => next.close_tab(id),
            TabAction::Navigate(id, input) => next.navigate(id, input),
        };

        if changed { Rc::new(next) } else { self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry_with(n: usize) -> (TabRegistry, Vec<TabId>) {
        let mut registry = TabRegistry::new();
        let ids = (0..n).map(|_| registry.create_tab(None)).collect();
        (registry, ids)
    }

    fn active_count(registry: &TabRegistry) -> usize {
        registry
            .tabs()
            .iter()
            .filter(|t| Some(t.id) == registry.active_id())
            .count()
    }

    #[test]
    fn test_registry_new() {
        let registry = TabRegistry::new();

        assert!(registry.is_empty());
        assert_eq!(registry.active_id(), None);
    }

    #[test]
    fn test_create_tabs() {
        let (registry, ids) = registry_with(5);

        assert_eq!(registry.len(), 5);
        assert_eq!(active_count(&registry), 1);
        assert_eq!(registry.active_id(), Some(ids[4]));
    }

    #[test]
    fn test_create_tab_with_url() {
        let mut registry = TabRegistry::new();
        let id = registry.create_tab(Some("https://example.com".to_string()));

        let tab = registry.get(id).unwrap();
        assert_eq!(tab.label, "example.com");
        assert_eq!(tab.url.as_deref(), Some("https://example.com"));
    }

    #[test]
    fn test_switch_tab() {
        let (mut registry, ids) = registry_with(3);

        assert!(registry.switch_tab(ids[0]));
        assert_eq!(registry.active_id(), Some(ids[0]));
        assert_eq!(active_count(&registry), 1);
    }

    #[test]
    fn test_switch_unknown_tab_is_noop() {
        let (mut registry, ids) = registry_with(2);
        let stranger = TabId::new();

        assert!(!registry.switch_tab(stranger));
        assert_eq!(registry.active_id(), Some(ids[1]));
    }

    #[test]
    fn test_close_active_promotes_last_remaining() {
        let (mut registry, ids) = registry_with(3);
        registry.switch_tab(ids[1]);

        assert!(registry.close_tab(ids[1]));

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.active_id(), Some(ids[2]));
        assert_eq!(active_count(&registry), 1);
    }

    #[test]
    fn test_close_inactive_keeps_selection() {
        let (mut registry, ids) = registry_with(3);

        registry.close_tab(ids[0]);

        assert_eq!(registry.active_id(), Some(ids[2]));
        assert_eq!(registry.tabs()[0].id, ids[1]);
    }

    #[test]
    fn test_close_last_tab_clears_selection() {
        let (mut registry, ids) = registry_with(1);

        registry.close_tab(ids[0]);

        assert!(registry.is_empty());
        assert_eq!(registry.active_id(), None);
        assert!(registry.active().is_none());
    }

    #[test]
    fn test_close_unknown_tab_is_noop() {
        let (mut registry, _) = registry_with(2);

        assert!(!registry.close_tab(TabId::new()));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_navigate() {
        let (mut registry, ids) = registry_with(2);

        assert!(registry.navigate(ids[0], "https://docs.rs/yew".to_string()));

        let tab = registry.get(ids[0]).unwrap();
        assert_eq!(tab.label, "docs.rs");
        assert_eq!(tab.revision, 1);
        // navigating does not steal focus
        assert_eq!(registry.active_id(), Some(ids[1]));
    }

    #[test]
    fn test_reducer_actions() {
        let registry = Rc::new(TabRegistry::new());

        let registry = registry.reduce(TabAction::Create(None));
        let first = registry.active_id().unwrap();
        let registry = registry.reduce(TabAction::Create(Some("https://a.example".to_string())));
        let second = registry.active_id().unwrap();

        let registry = registry.reduce(TabAction::Switch(first));
        assert_eq!(registry.active_id(), Some(first));

        let registry = registry.reduce(TabAction::Close(first));
        assert_eq!(registry.active_id(), Some(second));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_reducer_noop_keeps_same_state() {
        let registry = Rc::new(TabRegistry::new()).reduce(TabAction::Create(None));
        let active = registry.active_id().unwrap();

        let after = registry.clone().reduce(TabAction::Switch(active));
        assert!(Rc::ptr_eq(&registry, &after));

        let after = registry.clone().reduce(TabAction::Close(TabId::new()));
        assert!(Rc::ptr_eq(&registry, &after));
    }
}
