use crate::domain::{OccupancyStatus, Property};
use chrono::NaiveDate;
use std::rc::Rc;

/// Source of the property rows shown by the property management tab.
pub trait PropertyProvider {
    fn properties(&self) -> Vec<Property>;
}

/// Fixed rows used until a backend feed exists.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleProperties;

impl PropertyProvider for SampleProperties {
    fn properties(&self) -> Vec<Property> {
        sample_properties()
    }
}

impl<F> PropertyProvider for F
where
    F: Fn() -> Vec<Property>,
{
    fn properties(&self) -> Vec<Property> {
        self()
    }
}

fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

pub fn sample_properties() -> Vec<Property> {
    vec![
        Property::new(1, "Shopping Center A", OccupancyStatus::Vacant, day(2023, 9, 15)),
        Property::new(2, "Retail Store B", OccupancyStatus::Occupied, day(2023, 10, 1)),
        Property::new(3, "Office Building C", OccupancyStatus::Vacant, day(2023, 9, 20)),
    ]
}

#[derive(Clone)]
pub struct PropertyRepository {
    provider: Rc<dyn PropertyProvider>,
}

impl PropertyRepository {
    pub fn new() -> Self {
        Self::with_provider(SampleProperties)
    }

    pub fn with_provider(provider: impl PropertyProvider + 'static) -> Self {
        Self {
            provider: Rc::new(provider),
        }
    }

    pub fn load(&self) -> Vec<Property> {
        self.provider.properties()
    }
}

impl Default for PropertyRepository {
    fn default() -> Self {
        Self::new()
    }
}
