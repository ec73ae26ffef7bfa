use dioxus::prelude::*;
use shared_types::TicketStatus;
use shared_ui::{Card, CardContent, CardHeader, CardTitle, StatCard, StatGrid};

use super::DashboardHeader;
use crate::format_helpers::format_peso;
use crate::i18n::use_translator;
use crate::mock;
use crate::routes::tickets::TicketTable;

/// Tenant operations overview for the ISP's own administrator.
#[component]
pub fn SystemAdminDashboard() -> Element {
    let t = use_translator();
    let open: Vec<_> = mock::tickets()
        .into_iter()
        .filter(|x| x.status != TicketStatus::Resolved)
        .collect();
    let subscribers = mock::customers().iter().filter(|c| c.active).count();
    let revenue: f64 = mock::invoices().iter().map(|i| i.amount).sum();

    rsx! {
        DashboardHeader {}
        StatGrid {
            StatCard { label: t.translate("Open Tickets").to_string(), value: open.len().to_string() }
            StatCard { label: t.translate("Active Subscribers").to_string(), value: subscribers.to_string() }
            StatCard { label: t.translate("Monthly Revenue").to_string(), value: format_peso(revenue) }
        }
        Card {
            CardHeader {
                CardTitle { {t.translate("Open Tickets")} }
            }
            CardContent {
                TicketTable { tickets: open }
            }
        }
    }
}
