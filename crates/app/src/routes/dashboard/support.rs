use dioxus::prelude::*;
use shared_types::TicketStatus;
use shared_ui::{Card, CardContent, CardHeader, CardTitle, StatCard, StatGrid};

use super::DashboardHeader;
use crate::i18n::use_translator;
use crate::mock;
use crate::routes::tickets::TicketTable;

#[component]
pub fn CustomerSupportDashboard() -> Element {
    let t = use_translator();
    let tickets = mock::tickets();
    let unassigned: Vec<_> = tickets
        .iter()
        .filter(|x| x.assignee.is_none() && x.status != TicketStatus::Resolved)
        .cloned()
        .collect();
    let open = tickets.iter().filter(|x| x.status == TicketStatus::Open).count();

    rsx! {
        DashboardHeader {}
        StatGrid {
            StatCard { label: t.translate("Open Tickets").to_string(), value: open.to_string() }
            StatCard {
                label: t.translate("Unassigned").to_string(),
                value: unassigned.len().to_string(),
            }
        }
        Card {
            CardHeader {
                CardTitle { {t.translate("Unassigned")} }
            }
            CardContent {
                TicketTable { tickets: unassigned }
            }
        }
    }
}
