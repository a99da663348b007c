use crate::domain::{InvoiceStatus, NextAction, OccupancyStatus};
use serde::{Deserialize, Serialize};

/// Allowed values for the string-valued domain fields, for form and filter
/// logic in the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomData {
    pub property_types: Vec<String>,
    pub invoice_statuses: Vec<String>,
    pub occupancy_statuses: Vec<String>,
    pub action_types: Vec<String>,
}

pub const PROPERTY_TYPES: [&str; 3] = ["Shopping Center", "Retail Store", "Office Building"];

pub fn custom_data() -> CustomData {
    CustomData {
        property_types: PROPERTY_TYPES.iter().map(|t| t.to_string()).collect(),
        invoice_statuses: InvoiceStatus::ALL.iter().map(|s| s.as_str().to_string()).collect(),
        occupancy_statuses: OccupancyStatus::ALL
            .iter()
            .map(|s| s.as_str().to_string())
            .collect(),
        action_types: NextAction::ALL.iter().map(|a| a.as_str().to_string()).collect(),
    }
}

impl CustomData {
    pub fn allows_occupancy_status(&self, value: &str) -> bool {
        self.occupancy_statuses.iter().any(|s| s == value)
    }

    pub fn allows_invoice_status(&self, value: &str) -> bool {
        self.invoice_statuses.iter().any(|s| s == value)
    }

    pub fn allows_action_type(&self, value: &str) -> bool {
        self.action_types.iter().any(|s| s == value)
    }
}
