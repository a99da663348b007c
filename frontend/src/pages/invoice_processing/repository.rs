use crate::domain::{Invoice, InvoiceStatus};
use chrono::NaiveDate;
use std::rc::Rc;

pub trait InvoiceProvider {
    fn invoices(&self) -> Vec<Invoice>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SampleInvoices;

impl InvoiceProvider for SampleInvoices {
    fn invoices(&self) -> Vec<Invoice> {
        sample_invoices()
    }
}

impl<F> InvoiceProvider for F
where
    F: Fn() -> Vec<Invoice>,
{
    fn invoices(&self) -> Vec<Invoice> {
        self()
    }
}

fn invoice(
    id: u32,
    property: &str,
    amount: i64,
    status: InvoiceStatus,
    due: (i32, u32, u32),
) -> Invoice {
    Invoice {
        id,
        property: property.into(),
        amount,
        status,
        due_date: NaiveDate::from_ymd_opt(due.0, due.1, due.2).unwrap_or_default(),
    }
}

pub fn sample_invoices() -> Vec<Invoice> {
    vec![
        invoice(1, "Shopping Center A", 5000, InvoiceStatus::Pending, (2023, 9, 30)),
        invoice(2, "Retail Store B", 3000, InvoiceStatus::Paid, (2023, 9, 15)),
        invoice(3, "Office Building C", 7000, InvoiceStatus::Overdue, (2023, 9, 1)),
    ]
}

#[derive(Clone)]
pub struct InvoiceRepository {
    provider: Rc<dyn InvoiceProvider>,
}

impl InvoiceRepository {
    pub fn new() -> Self {
        Self::with_provider(SampleInvoices)
    }

    pub fn with_provider(provider: impl InvoiceProvider + 'static) -> Self {
        Self {
            provider: Rc::new(provider),
        }
    }

    pub fn load(&self) -> Vec<Invoice> {
        self.provider.invoices()
    }
}

impl Default for InvoiceRepository {
    fn default() -> Self {
        Self::new()
    }
}
