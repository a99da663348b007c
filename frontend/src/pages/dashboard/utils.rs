use crate::customization::{AppConfig, TabConfig};

/// Tabs shown in navigation. A tab whose id is also a feature name is hidden
/// when that feature is switched off.
pub fn visible_tabs(config: &AppConfig) -> Vec<TabConfig> {
    config
        .dashboard
        .tabs
        .iter()
        .filter(|tab| tab_enabled(config, &tab.id))
        .cloned()
        .collect()
}

/// `false` when the tab's feature flag is explicitly switched off.
pub fn tab_enabled(config: &AppConfig, id: &str) -> bool {
    config.features.get(id) != Some(&false)
}

pub fn active_tab_id(config: &AppConfig, requested: Option<&str>) -> Option<String> {
    match requested.filter(|id| !id.is_empty()) {
        Some(id) => Some(id.to_string()),
        None => visible_tabs(config).first().map(|tab| tab.id.clone()),
    }
}

pub fn tab_href(id: &str) -> String {
    format!("/dashboard/{id}")
}

pub fn tab_link_class(active: bool) -> String {
    format!(
        "flex items-start gap-3 p-4 rounded-lg border bg-white shadow-sm hover:bg-gray-50 {}",
        if active { "border-brand-600" } else { "border-gray-200" }
    )
}
