use leptos::*;

const HEADER_CELL_CLASS: &str =
    "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider";
pub const BODY_CELL_CLASS: &str = "px-6 py-4 whitespace-nowrap text-sm text-gray-900";

#[component]
pub fn PanelCard(
    #[prop(into)] title: String,
    #[prop(optional, into)] accent: Option<String>,
    children: Children,
) -> impl IntoView {
    let style = accent
        .map(|color| format!("border-top: 4px solid {color};"))
        .unwrap_or_default();
    view! {
        <div class="p-4 bg-white rounded-lg shadow" style=style>
            <h2 class="text-xl font-bold mb-4">{title}</h2>
            {children()}
        </div>
    }
}

#[component]
pub fn TableHeader(columns: &'static [&'static str]) -> impl IntoView {
    view! {
        <thead>
            <tr>
                {columns
                    .iter()
                    .map(|column| view! { <th class=HEADER_CELL_CLASS>{*column}</th> })
                    .collect_view()}
            </tr>
        </thead>
    }
}
