use crate::domain::Property;
use crate::pages::property_management::repository::PropertyRepository;
use leptos::*;

/// Local, per-panel copy of the property rows.
#[derive(Clone, Copy)]
pub struct PropertyManagementViewModel {
    pub properties: RwSignal<Vec<Property>>,
}

impl PropertyManagementViewModel {
    pub fn new() -> Self {
        let repo = use_context::<PropertyRepository>().unwrap_or_else(PropertyRepository::new);
        Self {
            properties: create_rw_signal(repo.load()),
        }
    }

    /// Returns `false` when no row has `id`.
    pub fn toggle_occupancy(&self, id: u32) -> bool {
        let mut found = false;
        self.properties.update(|rows| {
            if let Some(row) = rows.iter_mut().find(|row| row.id == id) {
                row.toggle_occupancy();
                found = true;
            }
        });
        found
    }
}
