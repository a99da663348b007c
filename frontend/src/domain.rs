use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OccupancyStatus {
    Vacant,
    Occupied,
}

impl OccupancyStatus {
    pub const ALL: [OccupancyStatus; 2] = [OccupancyStatus::Vacant, OccupancyStatus::Occupied];

    pub fn as_str(&self) -> &'static str {
        match self {
            OccupancyStatus::Vacant => "Vacant",
            OccupancyStatus::Occupied => "Occupied",
        }
    }

    /// Action that moves a property out of this status.
    pub fn paired_action(&self) -> NextAction {
        match self {
            OccupancyStatus::Vacant => NextAction::Occupy,
            OccupancyStatus::Occupied => NextAction::Vacate,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            OccupancyStatus::Vacant => OccupancyStatus::Occupied,
            OccupancyStatus::Occupied => OccupancyStatus::Vacant,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NextAction {
    Occupy,
    Vacate,
}

impl NextAction {
    pub const ALL: [NextAction; 2] = [NextAction::Occupy, NextAction::Vacate];

    pub fn as_str(&self) -> &'static str {
        match self {
            NextAction::Occupy => "Occupy",
            NextAction::Vacate => "Vacate",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InvoiceStatus {
    Pending,
    Paid,
    Overdue,
}

impl InvoiceStatus {
    pub const ALL: [InvoiceStatus; 3] = [
        InvoiceStatus::Pending,
        InvoiceStatus::Paid,
        InvoiceStatus::Overdue,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Pending => "Pending",
            InvoiceStatus::Paid => "Paid",
            InvoiceStatus::Overdue => "Overdue",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: u32,
    pub name: String,
    pub status: OccupancyStatus,
    pub next_action: NextAction,
    pub next_action_date: NaiveDate,
}

impl Property {
    pub fn new(id: u32, name: impl Into<String>, status: OccupancyStatus, date: NaiveDate) -> Self {
        Self {
            id,
            name: name.into(),
            status,
            next_action: status.paired_action(),
            next_action_date: date,
        }
    }

    /// Flips occupancy and keeps the next action paired with the new status.
    pub fn toggle_occupancy(&mut self) {
        self.status = self.status.toggled();
        self.next_action = self.status.paired_action();
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: u32,
    /// Property name, not a key into the property list.
    pub property: String,
    pub amount: i64,
    pub status: InvoiceStatus,
    pub due_date: NaiveDate,
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn status_pairs_with_action() {
        assert_eq!(OccupancyStatus::Vacant.paired_action(), NextAction::Occupy);
        assert_eq!(OccupancyStatus::Occupied.paired_action(), NextAction::Vacate);
    }

    #[test]
    fn toggle_occupancy_updates_paired_action() {
        let mut property = Property::new(
            1,
            "Shopping Center A",
            OccupancyStatus::Vacant,
            date(2023, 9, 15),
        );
        property.toggle_occupancy();
        assert_eq!(property.status, OccupancyStatus::Occupied);
        assert_eq!(property.next_action, NextAction::Vacate);
        assert_eq!(property.next_action_date, date(2023, 9, 15));

        property.toggle_occupancy();
        assert_eq!(property.status, OccupancyStatus::Vacant);
        assert_eq!(property.next_action, NextAction::Occupy);
    }

    #[test]
    fn formats_dates_as_iso() {
        assert_eq!(format_date(date(2023, 9, 1)), "2023-09-01");
    }

    #[wasm_bindgen_test]
    fn serialize_property_camel_case_fields() {
        let property = Property::new(
            2,
            "Retail Store B",
            OccupancyStatus::Occupied,
            date(2023, 10, 1),
        );
        let v = serde_json::to_value(&property).unwrap();
        assert_eq!(v["status"], serde_json::json!("Occupied"));
        assert_eq!(v["nextAction"], serde_json::json!("Vacate"));
        assert_eq!(v["nextActionDate"], serde_json::json!("2023-10-01"));
    }

    #[wasm_bindgen_test]
    fn deserialize_invoice_status_strings() {
        let raw = r#"{"id":3,"property":"Office Building C","amount":7000,"status":"Overdue","dueDate":"2023-09-01"}"#;
        let invoice: Invoice = serde_json::from_str(raw).unwrap();
        assert_eq!(invoice.status, InvoiceStatus::Overdue);
        assert_eq!(invoice.amount, 7000);
        assert_eq!(invoice.due_date, date(2023, 9, 1));
    }

    #[test]
    fn as_str_matches_serialized_form() {
        for status in OccupancyStatus::ALL {
            assert_eq!(serde_json::to_value(status).unwrap(), serde_json::json!(status.as_str()));
        }
        for action in NextAction::ALL {
            assert_eq!(serde_json::to_value(action).unwrap(), serde_json::json!(action.as_str()));
        }
        for status in InvoiceStatus::ALL {
            assert_eq!(serde_json::to_value(status).unwrap(), serde_json::json!(status.as_str()));
        }
    }
}
