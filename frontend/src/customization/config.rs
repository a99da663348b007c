use crate::config::RuntimeConfig;
use crate::customization::registry::ComponentRegistry;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use std::collections::BTreeMap;

/// Icon names understood by the lucide icon set loaded by the host page.
pub mod icons {
    pub const HOME: &str = "home";
    pub const BAR_CHART_2: &str = "bar-chart-2";
    pub const SETTINGS: &str = "settings";
    pub const USERS: &str = "users";
    pub const CALENDAR: &str = "calendar";
    pub const PHONE: &str = "phone";
    pub const FILE_TEXT: &str = "file-text";
    pub const CHECK_SQUARE: &str = "check-square";
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IconRef(String);

impl IconRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    pub title: String,
    pub company_name: String,
    pub logo: String,
    pub primary_color: String,
    pub secondary_color: String,
    pub user_name: String,
    pub dashboard: DashboardSection,
    pub analytics: AnalyticsSection,
    pub clients: Vec<Client>,
    pub features: BTreeMap<String, bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSection {
    pub tabs: Vec<TabConfig>,
    pub charts: BTreeMap<String, ChartConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsSection {
    pub charts: BTreeMap<String, ChartConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabConfig {
    pub id: String,
    pub label: String,
    pub description: String,
    pub icon: IconRef,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Pie,
    Bar,
    Line,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data_keys: Vec<String>,
    pub colors: Vec<String>,
    pub data: Vec<Map<String, Value>>,
}

impl ChartConfig {
    /// Every `(point index, key)` where a data key is absent from a data point.
    pub fn missing_data_keys(&self) -> Vec<(usize, String)> {
        self.data
            .iter()
            .enumerate()
            .flat_map(|(idx, point)| {
                self.data_keys
                    .iter()
                    .filter(|key| !point.contains_key(key.as_str()))
                    .map(move |key| (idx, key.clone()))
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub id: String,
    pub name: String,
    pub industry: String,
}

impl AppConfig {
    pub fn tab(&self, id: &str) -> Option<&TabConfig> {
        self.dashboard.tabs.iter().find(|tab| tab.id == id)
    }

    pub fn feature_enabled(&self, name: &str) -> bool {
        self.features.get(name).copied().unwrap_or(false)
    }

    /// Tabs that are listed for navigation but have no view in `registry`.
    pub fn unregistered_tabs<'a>(&'a self, registry: &ComponentRegistry) -> Vec<&'a str> {
        self.dashboard
            .tabs
            .iter()
            .filter(|tab| !registry.contains(&tab.id))
            .map(|tab| tab.id.as_str())
            .collect()
    }

    pub fn all_charts(&self) -> impl Iterator<Item = (&str, &ChartConfig)> {
        self.dashboard
            .charts
            .iter()
            .chain(self.analytics.charts.iter())
            .map(|(name, chart)| (name.as_str(), chart))
    }

    pub fn with_overrides(mut self, overrides: &RuntimeConfig) -> Self {
        let fields = [
            (&mut self.title, &overrides.title),
            (&mut self.company_name, &overrides.company_name),
            (&mut self.logo, &overrides.logo),
            (&mut self.primary_color, &overrides.primary_color),
            (&mut self.secondary_color, &overrides.secondary_color),
            (&mut self.user_name, &overrides.user_name),
        ];
        for (target, value) in fields {
            if let Some(value) = value.as_ref().filter(|v| !v.trim().is_empty()) {
                *target = value.clone();
            }
        }
        self
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        quoinstone_config()
    }
}

fn point(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

fn chart(kind: ChartKind, data_key: &str, colors: &[&str], data: Vec<Value>) -> ChartConfig {
    ChartConfig {
        kind,
        data_keys: vec![data_key.to_string()],
        colors: colors.iter().map(|c| c.to_string()).collect(),
        data: data.into_iter().map(point).collect(),
    }
}

fn tab(id: &str, label: &str, description: &str, icon: &str) -> TabConfig {
    TabConfig {
        id: id.into(),
        label: label.into(),
        description: description.into(),
        icon: IconRef::new(icon),
    }
}

fn client(id: &str, name: &str, industry: &str) -> Client {
    Client {
        id: id.into(),
        name: name.into(),
        industry: industry.into(),
    }
}

pub fn quoinstone_config() -> AppConfig {
    let dashboard_charts = BTreeMap::from([
        (
            "propertyStatus".to_string(),
            chart(
                ChartKind::Pie,
                "value",
                &["#4F46E5", "#818CF8"],
                vec![
                    json!({ "name": "Occupied", "value": 60 }),
                    json!({ "name": "Vacant", "value": 40 }),
                ],
            ),
        ),
        (
            "invoiceStatus".to_string(),
            chart(
                ChartKind::Bar,
                "count",
                &["#4F46E5"],
                vec![
                    json!({ "name": "Pending", "count": 10 }),
                    json!({ "name": "Paid", "count": 15 }),
                    json!({ "name": "Overdue", "count": 5 }),
                ],
            ),
        ),
    ]);

    let analytics_charts = BTreeMap::from([
        (
            "occupancyRate".to_string(),
            chart(
                ChartKind::Line,
                "rate",
                &["#4F46E5"],
                vec![
                    json!({ "month": "Jan", "rate": 80 }),
                    json!({ "month": "Feb", "rate": 75 }),
                    json!({ "month": "Mar", "rate": 85 }),
                    json!({ "month": "Apr", "rate": 90 }),
                ],
            ),
        ),
        (
            "revenueByProperty".to_string(),
            chart(
                ChartKind::Bar,
                "revenue",
                &["#818CF8"],
                vec![
                    json!({ "property": "Shopping Center A", "revenue": 50000 }),
                    json!({ "property": "Retail Store B", "revenue": 30000 }),
                    json!({ "property": "Office Building C", "revenue": 70000 }),
                ],
            ),
        ),
    ]);

    AppConfig {
        title: "QuoinStone Property Management".into(),
        company_name: "QuoinStone Group".into(),
        logo: "/path/to/quoinstone-logo.png".into(),
        primary_color: "#4F46E5".into(),
        secondary_color: "#818CF8".into(),
        user_name: "Tim Struth".into(),
        dashboard: DashboardSection {
            tabs: vec![
                tab(
                    "propertyManagement",
                    "Property Management",
                    "Manage property occupancy and vacancies",
                    icons::HOME,
                ),
                tab(
                    "invoiceProcessing",
                    "Invoice Processing",
                    "Process and track property invoices",
                    icons::FILE_TEXT,
                ),
            ],
            charts: dashboard_charts,
        },
        analytics: AnalyticsSection {
            charts: analytics_charts,
        },
        clients: vec![
            client("client1", "Major Retailer", "Retail"),
            client("client2", "Office Space Inc", "Commercial Real Estate"),
            client("client3", "Shopping Mall Group", "Retail"),
        ],
        features: BTreeMap::from([
            ("propertyManagement".to_string(), true),
            ("invoiceProcessing".to_string(), true),
            ("reporting".to_string(), true),
            ("clientCommunication".to_string(), true),
        ]),
    }
}
