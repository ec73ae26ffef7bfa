use dioxus::prelude::*;
use shared_ui::{
    Badge, BadgeTone, Card, CardContent, CardHeader, CardTitle, DataTable, DataTableBody,
    DataTableCell, DataTableColumn, DataTableHeader, DataTableRow, StatCard, StatGrid,
};

use super::DashboardHeader;
use crate::format_helpers::format_peso;
use crate::i18n::use_translator;
use crate::mock;
use crate::routes::Route;

/// Platform-wide overview across every tenant.
#[component]
pub fn SuperAdminDashboard() -> Element {
    let t = use_translator();
    let tenants = mock::tenants();
    let active = tenants.iter().filter(|x| !x.suspended).count();
    let subscribers: u32 = tenants.iter().map(|x| x.subscribers).sum();
    let revenue: f64 = mock::tenant_invoices().iter().map(|i| i.amount).sum();

    rsx! {
        DashboardHeader {}
        StatGrid {
            StatCard { label: t.translate("Active Tenants").to_string(), value: active.to_string() }
            StatCard { label: t.translate("Active Subscribers").to_string(), value: subscribers.to_string() }
            StatCard { label: t.translate("Monthly Revenue").to_string(), value: format_peso(revenue) }
        }
        Card {
            CardHeader {
                CardTitle { {t.translate("Tenants")} }
            }
            CardContent {
                DataTable {
                    DataTableHeader {
                        DataTableColumn { {t.translate("Name")} }
                        DataTableColumn { {t.translate("Subscribers")} }
                        DataTableColumn { {t.translate("Status")} }
                    }
                    DataTableBody {
                        for tenant in tenants {
                            DataTableRow {
                                key: "{tenant.id}",
                                onclick: move |_| { navigator().push(Route::Tenants {}); },
                                DataTableCell { "{tenant.name}" }
                                DataTableCell { "{tenant.subscribers}" }
                                DataTableCell {
                                    if tenant.suspended {
                                        Badge { tone: BadgeTone::Danger, {t.translate("Suspended")} }
                                    } else {
                                        Badge { tone: BadgeTone::Success, {t.translate("Active")} }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
