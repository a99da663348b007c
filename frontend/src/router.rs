use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::{pages::dashboard::DashboardPage, state::config::use_app_config};

pub const ROUTE_PATHS: &[&str] = &["/", "/dashboard", "/dashboard/:tab"];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    let config = use_app_config();
    crate::state::config::use_component_registry();

    spawn_local(async move {
        crate::state::config::apply_runtime_overrides(config).await;
    });

    view! {
        <Title text=move || config.with(|c| c.title.clone()) />
        <Router>
            <Routes>
                <Route path="/" view=|| view! { <DashboardPage/> }/>
                <Route path="/dashboard" view=|| view! { <DashboardPage/> }/>
                <Route path="/dashboard/:tab" view=DashboardTab/>
            </Routes>
        </Router>
    }
}

#[component]
fn DashboardTab() -> impl IntoView {
    let params = use_params_map();
    let tab = Signal::derive(move || params.with(|p| p.get("tab").cloned()));
    view! { <DashboardPage active_tab=tab /> }
}
