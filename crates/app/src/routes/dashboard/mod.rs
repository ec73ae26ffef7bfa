mod customer;
mod it_ops;
mod super_admin;
mod support;
mod system_admin;
mod technician;

pub use customer::CustomerPortalDashboard;
pub use it_ops::ItOperationsDashboard;
pub use super_admin::SuperAdminDashboard;
pub use support::CustomerSupportDashboard;
pub use system_admin::SystemAdminDashboard;
pub use technician::TechnicianMapView;

use dioxus::prelude::*;
use shared_ui::PageHeader;

use crate::i18n::use_translator;
use crate::session::use_role;

/// "Dashboard" heading greeting the current role.
#[component]
fn DashboardHeader() -> Element {
    let t = use_translator();
    let role = use_role();
    let greeting = t.translate_with("Welcome back, {name}", &[("name", t.translate(role.label()))]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("/assets/pages.css") }
        PageHeader { title: t.translate("Dashboard").to_string(), subtitle: greeting }
    }
}
