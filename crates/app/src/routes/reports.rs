use dioxus::prelude::*;
use shared_types::{ServicePlan, TicketStatus};
use shared_ui::{Card, CardContent, CardHeader, CardTitle, PageHeader, StatCard, StatGrid};

use crate::format_helpers::format_peso;
use crate::i18n::use_translator;
use crate::mock;

/// Share of `part` in `total` as a whole percentage; 0 for an empty total.
fn percent(part: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (part * 100 / total) as u32
}

/// Demo revenue: one plan price per active customer on it.
fn revenue_by_plan(plans: &[ServicePlan]) -> Vec<(String, f64)> {
    let customers = mock::customers();
    plans
        .iter()
        .map(|plan| {
            let count = customers
                .iter()
                .filter(|c| c.active && c.plan == plan.name)
                .count();
            (plan.name.clone(), plan.monthly_price * count as f64)
        })
        .collect()
}

#[component]
pub fn ReportsPage() -> Element {
    let t = use_translator();
    let tickets = mock::tickets();
    let resolved = tickets.iter().filter(|x| x.status == TicketStatus::Resolved).count();
    let resolution = percent(resolved, tickets.len());
    let revenue = revenue_by_plan(&mock::service_plans());
    let total: f64 = revenue.iter().map(|(_, amount)| amount).sum();
    let bars: Vec<_> = revenue
        .into_iter()
        .map(|(plan, amount)| {
            let width = percent(amount as usize, total.max(1.0) as usize);
            (plan, amount, width)
        })
        .collect();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("/assets/pages.css") }
        PageHeader { title: t.translate("Reports").to_string() }
        StatGrid {
            StatCard { label: t.translate("Monthly Revenue").to_string(), value: format_peso(total) }
            StatCard {
                label: t.translate("Ticket Resolution").to_string(),
                value: format!("{resolution}%"),
                hint: format!("{resolved} / {}", tickets.len()),
            }
        }
        Card {
            CardHeader {
                CardTitle { {t.translate("Revenue by Plan")} }
            }
            CardContent {
                ul { class: "bar-list",
                    for (plan, amount, width) in bars {
                        li { key: "{plan}", class: "bar-row",
                            span { class: "bar-label", "{plan}" }
                            span { class: "bar", style: "width: {width}%" }
                            span { class: "bar-value", {format_peso(amount)} }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_handles_empty_total() {
        assert_eq!(percent(0, 0), 0);
        assert_eq!(percent(1, 6), 16);
        assert_eq!(percent(6, 6), 100);
    }

    #[test]
    fn revenue_counts_active_customers() {
        let revenue = revenue_by_plan(&mock::service_plans());
        let fiber_100 = revenue.iter().find(|(name, _)| name == "Fiber 100").unwrap();
        assert_eq!(fiber_100.1, 1699.0);
        let fiber_1000 = revenue.iter().find(|(name, _)| name == "Fiber 1000").unwrap();
        assert_eq!(fiber_1000.1, 0.0);
    }
}
