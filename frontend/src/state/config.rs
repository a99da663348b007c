use crate::customization::{
    config::quoinstone_config, default_registry, AppConfig, ComponentRegistry,
};
use leptos::*;

pub fn use_app_config() -> RwSignal<AppConfig> {
    match use_context::<RwSignal<AppConfig>>() {
        Some(ctx) => ctx,
        None => {
            let config = create_rw_signal(quoinstone_config());
            provide_context(config);
            config
        }
    }
}

pub fn use_component_registry() -> ComponentRegistry {
    match use_context::<ComponentRegistry>() {
        Some(registry) => registry,
        None => {
            let registry = default_registry();
            provide_context(registry.clone());
            registry
        }
    }
}

pub async fn apply_runtime_overrides(config: RwSignal<AppConfig>) {
    let overrides = crate::config::load_runtime_config().await;
    if overrides == crate::config::RuntimeConfig::default() {
        return;
    }
    config.update(|current| *current = current.clone().with_overrides(&overrides));
    log::info!("applied runtime branding overrides");
}
