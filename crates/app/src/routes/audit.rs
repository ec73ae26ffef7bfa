use dioxus::prelude::*;
use shared_types::AuditEntry;
use shared_ui::{
    Card, CardContent, DataTable, DataTableBody, DataTableCell, DataTableColumn, DataTableEmpty,
    DataTableHeader, DataTableRow, PageHeader,
};

use crate::format_helpers::format_timestamp;
use crate::i18n::use_translator;
use crate::mock;

#[component]
fn AuditTable(entries: Vec<AuditEntry>, show_tenant: bool) -> Element {
    let t = use_translator();
    let columns = if show_tenant { 4 } else { 3 };

    rsx! {
        DataTable {
            DataTableHeader {
                DataTableColumn { {t.translate("Time")} }
                DataTableColumn { {t.translate("Actor")} }
                if show_tenant {
                    DataTableColumn { {t.translate("Tenant")} }
                }
                DataTableColumn { {t.translate("Action")} }
            }
            DataTableBody {
                if entries.is_empty() {
                    DataTableEmpty { columns: columns, {t.translate("No records")} }
                }
                for (i, entry) in entries.into_iter().enumerate() {
                    DataTableRow { key: "{i}",
                        DataTableCell { {format_timestamp(&entry.timestamp)} }
                        DataTableCell { "{entry.actor}" }
                        if show_tenant {
                            DataTableCell { {entry.tenant.clone().unwrap_or_else(|| "-".to_string())} }
                        }
                        DataTableCell { "{entry.action}" }
                    }
                }
            }
        }
    }
}

/// Platform-wide activity across every tenant.
#[component]
pub fn GlobalAuditLogs() -> Element {
    let t = use_translator();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("/assets/pages.css") }
        PageHeader { title: t.translate("Audit Logs").to_string() }
        Card {
            CardContent {
                AuditTable { entries: mock::audit_entries(), show_tenant: true }
            }
        }
    }
}

/// Activity inside the current tenant only.
#[component]
pub fn TenantAuditLog() -> Element {
    let t = use_translator();
    let entries: Vec<_> = mock::audit_entries()
        .into_iter()
        .filter(|e| e.tenant.as_deref() == Some(mock::CURRENT_TENANT))
        .collect();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("/assets/pages.css") }
        PageHeader { title: t.translate("Audit Logs").to_string(), subtitle: mock::CURRENT_TENANT.to_string() }
        Card {
            CardContent {
                AuditTable { entries: entries, show_tenant: false }
            }
        }
    }
}
