use crate::components::table::{PanelCard, TableHeader, BODY_CELL_CLASS};
use crate::customization::config::AppConfig;
use crate::domain::{format_date, Property};
use crate::pages::property_management::view_model::PropertyManagementViewModel;
use leptos::*;

pub const PROPERTY_COLUMNS: &[&str] = &["Property", "Status", "Next Action", "Next Action Date"];

#[component]
pub fn PropertyManagementPanel(config: AppConfig) -> impl IntoView {
    let vm = PropertyManagementViewModel::new();
    let properties = vm.properties;

    view! {
        <PanelCard title="Property Management" accent=config.primary_color>
            <table class="w-full">
                <TableHeader columns=PROPERTY_COLUMNS />
                <tbody>
                    <For
                        each=move || properties.get()
                        key=|property| property.id
                        children=move |property: Property| {
                            view! {
                                <tr>
                                    <td class=BODY_CELL_CLASS>{property.name}</td>
                                    <td class=BODY_CELL_CLASS>{property.status.as_str()}</td>
                                    <td class=BODY_CELL_CLASS>{property.next_action.as_str()}</td>
                                    <td class=BODY_CELL_CLASS>{format_date(property.next_action_date)}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </PanelCard>
    }
}
