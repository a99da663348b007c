use crate::components::{
    empty_state::EmptyState,
    layout::{Icon, Layout},
};
use crate::customization::TabConfig;
use crate::pages::dashboard::{
    utils::{tab_href, tab_link_class},
    view_model::DashboardViewModel,
};
use leptos::*;

#[component]
pub fn DashboardPage(
    #[prop(optional, into)] active_tab: MaybeSignal<Option<String>>,
) -> impl IntoView {
    let vm = DashboardViewModel::new(active_tab);
    let active = vm.active_tab;

    view! {
        <Layout>
            <div class="space-y-6">
                <nav class="grid grid-cols-1 gap-4 md:grid-cols-2">
                    <For
                        each=move || vm.tabs.get()
                        key=|tab| tab.id.clone()
                        children=move |tab: TabConfig| {
                            let id = tab.id.clone();
                            let is_active = move || active.get().as_deref() == Some(id.as_str());
                            let link_class = {
                                let is_active = is_active.clone();
                                move || tab_link_class(is_active())
                            };
                            let aria_current = move || if is_active() { "page" } else { "false" };
                            view! {
                                <a
                                    href=tab_href(&tab.id)
                                    class=link_class
                                    aria-current=aria_current
                                >
                                    <Icon icon=tab.icon class="h-5 w-5 text-brand-600" />
                                    <div>
                                        <p class="text-sm font-semibold text-gray-900">{tab.label}</p>
                                        <p class="text-xs text-gray-600">{tab.description}</p>
                                    </div>
                                </a>
                            }
                        }
                    />
                </nav>
                <section>
                    {move || {
                        vm.render_active().unwrap_or_else(|| {
                            let title = match active.get() {
                                Some(id) => format!("No view is available for \"{id}\""),
                                None => "No tabs are configured".to_string(),
                            };
                            view! {
                                <EmptyState title=title description="Choose another tab from the list above." />
                            }
                            .into_view()
                        })
                    }}
                </section>
            </div>
        </Layout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::customization::config::quoinstone_config;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn defaults_to_first_tab() {
        let html = render_to_string(|| view! { <DashboardPage /> });
        assert!(html.contains("Manage property occupancy and vacancies"));
        assert!(html.contains("Process and track property invoices"));
        assert!(html.contains("/dashboard/invoiceProcessing"));
        assert!(html.contains("Next Action Date"));
        assert!(!html.contains("Due Date"));
    }

    #[test]
    fn renders_requested_tab() {
        let html = render_to_string(|| {
            view! { <DashboardPage active_tab=Some("invoiceProcessing".to_string()) /> }
        });
        assert!(html.contains("£5000"));
        assert!(!html.contains("Next Action Date"));
    }

    #[test]
    fn active_tab_link_is_highlighted() {
        let html = render_to_string(|| {
            view! { <DashboardPage active_tab=Some("invoiceProcessing".to_string()) /> }
        });
        assert_eq!(html.matches("aria-current=\"page\"").count(), 1);
        assert_eq!(html.matches("border-brand-600").count(), 1);
        let highlighted = html.find("border-brand-600").unwrap();
        let invoice_link = html.find("/dashboard/invoiceProcessing").unwrap();
        let property_link = html.find("/dashboard/propertyManagement").unwrap();
        assert!(property_link < invoice_link);
        assert!(highlighted > invoice_link);
    }

    #[test]
    fn disabled_feature_tab_renders_placeholder_when_requested() {
        let html = render_to_string(|| {
            let mut config = quoinstone_config();
            config.features.insert("invoiceProcessing".into(), false);
            provide_context(create_rw_signal(config));
            view! { <DashboardPage active_tab=Some("invoiceProcessing".to_string()) /> }
        });
        assert!(html.contains("No view is available for"));
        assert!(!html.contains("£5000"));
        assert!(!html.contains("/dashboard/invoiceProcessing"));
    }

    #[test]
    fn unregistered_tab_renders_placeholder() {
        let html = render_to_string(|| {
            let mut config = quoinstone_config();
            config.dashboard.tabs.push(TabConfig {
                id: "reporting".into(),
                label: "Reporting".into(),
                description: "Monthly portfolio reports".into(),
                icon: crate::customization::IconRef::new(crate::customization::icons::BAR_CHART_2),
            });
            provide_context(create_rw_signal(config));
            view! { <DashboardPage active_tab=Some("reporting".to_string()) /> }
        });
        assert!(html.contains("Monthly portfolio reports"));
        assert!(html.contains("No view is available for"));
        assert!(html.contains("reporting"));
        assert!(!html.contains("<table"));
    }

    #[test]
    fn no_tabs_renders_placeholder() {
        let html = render_to_string(|| {
            let mut config = quoinstone_config();
            config.dashboard.tabs.clear();
            provide_context(create_rw_signal(config));
            view! { <DashboardPage /> }
        });
        assert!(html.contains("No tabs are configured"));
    }
}
