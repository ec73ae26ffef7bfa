use dioxus::prelude::*;

/// Dashboard KPI tile: a label, a large value and an optional hint line.
#[component]
pub fn StatCard(label: String, value: String, #[props(default)] hint: String) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "stat-card",
            span { class: "stat-card-label", "{label}" }
            strong { class: "stat-card-value", "{value}" }
            if !hint.is_empty() {
                span { class: "stat-card-hint", "{hint}" }
            }
        }
    }
}

/// Responsive grid of [`StatCard`]s.
#[component]
pub fn StatGrid(children: Element) -> Element {
    rsx! {
        div { class: "stat-grid", {children} }
    }
}
