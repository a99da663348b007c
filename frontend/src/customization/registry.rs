use crate::customization::config::AppConfig;
use crate::pages::{
    invoice_processing::InvoiceProcessingPanel, property_management::PropertyManagementPanel,
};
use leptos::*;
use std::collections::HashMap;
use thiserror::Error;

pub const PROPERTY_MANAGEMENT_TAB: &str = "propertyManagement";
pub const INVOICE_PROCESSING_TAB: &str = "invoiceProcessing";

/// A view the host shell can mount for a tab.
#[derive(Clone, Copy)]
pub struct TabView {
    name: &'static str,
    render: fn(AppConfig) -> View,
}

impl TabView {
    pub const fn new(name: &'static str, render: fn(AppConfig) -> View) -> Self {
        Self { name, render }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn render(&self, config: AppConfig) -> View {
        (self.render)(config)
    }
}

impl std::fmt::Debug for TabView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TabView").field("name", &self.name).finish()
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("tab `{0}` already has a registered view")]
    AlreadyRegistered(String),
}

#[derive(Debug, Clone, Default)]
pub struct ComponentRegistry {
    entries: HashMap<String, TabView>,
}

impl ComponentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a view for a new tab. Existing tabs keep their view.
    pub fn register(&mut self, id: impl Into<String>, view: TabView) -> Result<(), RegistryError> {
        let id = id.into();
        if self.entries.contains_key(&id) {
            return Err(RegistryError::AlreadyRegistered(id));
        }
        log::debug!("registering view `{}` for tab `{}`", view.name(), id);
        self.entries.insert(id, view);
        Ok(())
    }

    pub fn resolve(&self, id: &str) -> Option<TabView> {
        self.entries.get(id).copied()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn property_management_view(config: AppConfig) -> View {
    view! { <PropertyManagementPanel config=config /> }.into_view()
}

fn invoice_processing_view(config: AppConfig) -> View {
    view! { <InvoiceProcessingPanel config=config /> }.into_view()
}

pub const PROPERTY_MANAGEMENT_VIEW: TabView =
    TabView::new("PropertyManagement", property_management_view);
pub const INVOICE_PROCESSING_VIEW: TabView =
    TabView::new("InvoiceProcessing", invoice_processing_view);

pub fn default_registry() -> ComponentRegistry {
    let mut registry = ComponentRegistry::new();
    for (id, view) in [
        (PROPERTY_MANAGEMENT_TAB, PROPERTY_MANAGEMENT_VIEW),
        (INVOICE_PROCESSING_TAB, INVOICE_PROCESSING_VIEW),
    ] {
        if let Err(err) = registry.register(id, view) {
            log::warn!("{err}");
        }
    }
    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placeholder_view(_config: AppConfig) -> View {
        view! { <p>{"Reporting"}</p> }.into_view()
    }

    #[test]
    fn default_registry_lists_both_tabs() {
        let registry = default_registry();
        assert_eq!(registry.ids(), vec![INVOICE_PROCESSING_TAB, PROPERTY_MANAGEMENT_TAB]);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn resolve_unknown_tab_returns_none() {
        let registry = default_registry();
        assert!(registry.resolve("reporting").is_none());
        assert!(registry.resolve("").is_none());
    }

    #[test]
    fn resolves_distinct_views() {
        let registry = default_registry();
        let property = registry.resolve(PROPERTY_MANAGEMENT_TAB).unwrap();
        let invoice = registry.resolve(INVOICE_PROCESSING_TAB).unwrap();
        assert_eq!(property.name(), "PropertyManagement");
        assert_eq!(invoice.name(), "InvoiceProcessing");
        assert_ne!(property.name(), invoice.name());
    }

    #[test]
    fn register_adds_new_tab_without_touching_existing() {
        let mut registry = default_registry();
        registry
            .register("reporting", TabView::new("Reporting", placeholder_view))
            .unwrap();
        assert_eq!(registry.len(), 3);
        assert_eq!(
            registry.resolve(PROPERTY_MANAGEMENT_TAB).unwrap().name(),
            "PropertyManagement"
        );
    }

    #[test]
    fn register_rejects_existing_tab() {
        let mut registry = default_registry();
        let err = registry
            .register(INVOICE_PROCESSING_TAB, TabView::new("Replacement", placeholder_view))
            .unwrap_err();
        assert_eq!(err, RegistryError::AlreadyRegistered(INVOICE_PROCESSING_TAB.into()));
        assert_eq!(
            registry.resolve(INVOICE_PROCESSING_TAB).unwrap().name(),
            "InvoiceProcessing"
        );
    }
}
