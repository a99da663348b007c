pub mod dashboard;
pub mod invoice_processing;
pub mod property_management;

pub use dashboard::DashboardPage;
