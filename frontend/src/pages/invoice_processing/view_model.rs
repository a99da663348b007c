use crate::domain::Invoice;
use crate::pages::invoice_processing::repository::InvoiceRepository;
use leptos::*;

#[derive(Clone, Copy)]
pub struct InvoiceProcessingViewModel {
    pub invoices: RwSignal<Vec<Invoice>>,
}

impl InvoiceProcessingViewModel {
    pub fn new() -> Self {
        let repo = use_context::<InvoiceRepository>().unwrap_or_else(InvoiceRepository::new);
        Self {
            invoices: create_rw_signal(repo.load()),
        }
    }
}
