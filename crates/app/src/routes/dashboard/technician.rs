use dioxus::prelude::*;
use shared_types::TicketStatus;
use shared_ui::{StatCard, StatGrid};

use super::DashboardHeader;
use crate::i18n::use_translator;
use crate::mock;
use crate::routes::service_map::JobSites;

/// The field technician lands on their map of today's jobs.
#[component]
pub fn TechnicianMapView() -> Element {
    let t = use_translator();
    let jobs: Vec<_> = mock::tickets()
        .into_iter()
        .filter(|x| x.assignee.as_deref() == Some(mock::CURRENT_TECHNICIAN))
        .filter(|x| x.status != TicketStatus::Resolved)
        .collect();

    rsx! {
        DashboardHeader {}
        StatGrid {
            StatCard { label: t.translate("Jobs Today").to_string(), value: jobs.len().to_string() }
        }
        JobSites { jobs: jobs }
    }
}
