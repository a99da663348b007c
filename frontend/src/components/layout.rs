use crate::customization::{AppConfig, IconRef};
use crate::state::config::use_app_config;
use leptos::*;

#[component]
pub fn Icon(icon: IconRef, #[prop(optional, into)] class: String) -> impl IntoView {
    view! { <i data-lucide=icon.name().to_string() class=class aria-hidden="true"></i> }
}

#[component]
pub fn Header() -> impl IntoView {
    let config = use_app_config();
    let branding = move || config.with(|c: &AppConfig| (c.title.clone(), c.company_name.clone()));

    view! {
        <header
            class="shadow-sm border-b border-border text-white"
            style=move || config.with(|c| format!("background-color: {};", c.primary_color))
        >
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex items-center gap-3">
                        <img
                            class="h-8 w-auto"
                            src=move || config.with(|c| c.logo.clone())
                            alt=move || branding().1
                        />
                        <div>
                            <h1 class="text-xl font-semibold">{move || branding().0}</h1>
                            <p class="text-xs opacity-80">{move || branding().1}</p>
                        </div>
                    </div>
                    <div class="flex items-center gap-2 text-sm">
                        <span
                            class="inline-block h-2 w-2 rounded-full"
                            style=move || config.with(|c| format!("background-color: {};", c.secondary_color))
                        ></span>
                        <span>{move || config.with(|c| c.user_name.clone())}</span>
                    </div>
                </div>
            </div>
        </header>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <Header/>
            <main class="max-w-7xl mx-auto py-6 sm:px-6 lg:px-8">
                {children()}
            </main>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::customization::{config::quoinstone_config, icons};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn header_renders_branding() {
        let html = render_to_string(move || view! { <Header /> });
        assert!(html.contains("QuoinStone Property Management"));
        assert!(html.contains("QuoinStone Group"));
        assert!(html.contains("Tim Struth"));
        assert!(html.contains("/path/to/quoinstone-logo.png"));
        assert!(html.contains("background-color: #4F46E5;"));
    }

    #[test]
    fn header_follows_provided_config() {
        let html = render_to_string(move || {
            let mut config = quoinstone_config();
            config.title = "QuoinStone UAT".into();
            provide_context(create_rw_signal(config));
            view! { <Header /> }
        });
        assert!(html.contains("QuoinStone UAT"));
    }

    #[test]
    fn layout_renders_children() {
        let html = render_to_string(move || view! { <Layout><div>"child"</div></Layout> });
        assert!(html.contains("child"));
    }

    #[test]
    fn icon_renders_lucide_name() {
        let html = render_to_string(move || view! { <Icon icon=IconRef::new(icons::FILE_TEXT) /> });
        assert!(html.contains("data-lucide=\"file-text\""));
    }
}
