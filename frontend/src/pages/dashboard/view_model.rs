use crate::customization::{AppConfig, ComponentRegistry, TabConfig};
use crate::pages::dashboard::utils::{active_tab_id, tab_enabled, visible_tabs};
use crate::state::config::{use_app_config, use_component_registry};
use leptos::*;

#[derive(Clone, Copy)]
pub struct DashboardViewModel {
    pub config: RwSignal<AppConfig>,
    pub registry: StoredValue<ComponentRegistry>,
    pub tabs: Signal<Vec<TabConfig>>,
    pub active_tab: Signal<Option<String>>,
}

impl DashboardViewModel {
    pub fn new(requested_tab: MaybeSignal<Option<String>>) -> Self {
        let config = use_app_config();
        let registry = use_component_registry();

        {
            let registry = registry.clone();
            create_effect(move |_| {
                for id in config.with(|c| {
                    c.unregistered_tabs(&registry)
                        .into_iter()
                        .map(str::to_string)
                        .collect::<Vec<_>>()
                }) {
                    log::warn!("tab `{id}` has no registered view");
                }
            });
        }

        let tabs = Signal::derive(move || config.with(visible_tabs));
        let active_tab = Signal::derive(move || {
            let requested = requested_tab.get();
            config.with(|c| active_tab_id(c, requested.as_deref()))
        });

        Self {
            config,
            registry: store_value(registry),
            tabs,
            active_tab,
        }
    }

    pub fn render_active(&self) -> Option<View> {
        let id = self.active_tab.get()?;
        if !self.config.with(|c| tab_enabled(c, &id)) {
            log::warn!("tab `{id}` is switched off by its feature flag");
            return None;
        }
        let view = self.registry.with_value(|registry| registry.resolve(&id));
        match view {
            Some(view) => Some(view.render(self.config.get())),
            None => {
                log::warn!("no view registered for tab `{id}`");
                None
            }
        }
    }
}
