use crate::components::table::{PanelCard, TableHeader, BODY_CELL_CLASS};
use crate::customization::config::AppConfig;
use crate::domain::{format_date, Invoice};
use crate::pages::invoice_processing::{
    utils::format_amount, view_model::InvoiceProcessingViewModel,
};
use leptos::*;

pub const INVOICE_COLUMNS: &[&str] = &["Property", "Amount", "Status", "Due Date"];

#[component]
pub fn InvoiceProcessingPanel(config: AppConfig) -> impl IntoView {
    let vm = InvoiceProcessingViewModel::new();
    let invoices = vm.invoices;

    view! {
        <PanelCard title="Invoice Processing" accent=config.primary_color>
            <table class="w-full">
                <TableHeader columns=INVOICE_COLUMNS />
                <tbody>
                    <For
                        each=move || invoices.get()
                        key=|invoice| invoice.id
                        children=move |invoice: Invoice| {
                            view! {
                                <tr>
                                    <td class=BODY_CELL_CLASS>{invoice.property}</td>
                                    <td class=BODY_CELL_CLASS>{format_amount(invoice.amount)}</td>
                                    <td class=BODY_CELL_CLASS>{invoice.status.as_str()}</td>
                                    <td class=BODY_CELL_CLASS>{format_date(invoice.due_date)}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </PanelCard>
    }
}
