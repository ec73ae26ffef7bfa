use dioxus::prelude::*;
use shared_ui::{StatCard, StatGrid};

use super::DashboardHeader;
use crate::format_helpers::format_peso;
use crate::i18n::use_translator;
use crate::mock;

/// Customer portal home: current plan and what is due.
#[component]
pub fn CustomerPortalDashboard() -> Element {
    let t = use_translator();
    let plan = mock::customers()
        .into_iter()
        .find(|c| c.name == mock::CURRENT_CUSTOMER)
        .map(|c| c.plan)
        .unwrap_or_default();
    let due: f64 = mock::invoices()
        .iter()
        .filter(|i| i.account == mock::CURRENT_CUSTOMER && !i.paid)
        .map(|i| i.amount)
        .sum();
    let open = mock::tickets()
        .iter()
        .filter(|x| x.customer == mock::CURRENT_CUSTOMER)
        .count();

    rsx! {
        DashboardHeader {}
        StatGrid {
            StatCard { label: t.translate("Current Plan").to_string(), value: plan }
            StatCard { label: t.translate("Next Payment Due").to_string(), value: format_peso(due) }
            StatCard { label: t.translate("My Tickets").to_string(), value: open.to_string() }
        }
    }
}
