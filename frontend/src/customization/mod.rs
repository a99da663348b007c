//! The QuoinStone customization consumed by the dashboard shell: branding and
//! chart configuration, the tab view registry, and the allowed-value lists.

pub mod config;
pub mod data;
pub mod registry;

pub use config::{
    icons, quoinstone_config, AnalyticsSection, AppConfig, ChartConfig, ChartKind, Client,
    DashboardSection, IconRef, TabConfig,
};
pub use data::{custom_data, CustomData};
pub use registry::{default_registry, ComponentRegistry, RegistryError, TabView};

/// All three members together, for hosts that import them as one value.
#[derive(Debug, Clone)]
pub struct Customization {
    pub config: AppConfig,
    pub components: ComponentRegistry,
    pub data: CustomData,
}

pub fn customization() -> Customization {
    Customization {
        config: quoinstone_config(),
        components: default_registry(),
        data: custom_data(),
    }
}
