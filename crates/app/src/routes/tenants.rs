use dioxus::prelude::*;
use shared_ui::{
    use_toast, Badge, BadgeTone, Button, ButtonSize, ButtonVariant, Card, CardContent, DataTable,
    DataTableBody, DataTableCell, DataTableColumn, DataTableHeader, DataTableRow, PageHeader,
    ToastOptions,
};

use crate::i18n::use_translator;
use crate::mock;

/// ISP tenants on the platform. Suspension is local to the page.
#[component]
pub fn TenantManagement() -> Element {
    let t = use_translator();
    let toast = use_toast();
    let mut tenants = use_signal(mock::tenants);

    let mut suspend = move |id: String| {
        let mut list = tenants.write();
        let Some(tenant) = list.iter_mut().find(|x| x.id == id) else {
            return;
        };
        tenant.suspended = true;
        tracing::info!(tenant = %tenant.id, "Tenant suspended");
        toast.success(
            t.translate_with("Tenant {name} suspended", &[("name", tenant.name.as_str())]),
            ToastOptions::new(),
        );
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("/assets/pages.css") }
        PageHeader { title: t.translate("Tenants").to_string() }
        Card {
            CardContent {
                DataTable {
                    DataTableHeader {
                        DataTableColumn { "ID" }
                        DataTableColumn { {t.translate("Name")} }
                        DataTableColumn { {t.translate("Subscribers")} }
                        DataTableColumn { {t.translate("Status")} }
                        DataTableColumn { "" }
                    }
                    DataTableBody {
                        for tenant in tenants() {
                            DataTableRow { key: "{tenant.id}",
                                DataTableCell { "{tenant.id}" }
                                DataTableCell { "{tenant.name}" }
                                DataTableCell { "{tenant.subscribers}" }
                                DataTableCell {
                                    if tenant.suspended {
                                        Badge { tone: BadgeTone::Danger, {t.translate("Suspended")} }
                                    } else {
                                        Badge { tone: BadgeTone::Success, {t.translate("Active")} }
                                    }
                                }
                                DataTableCell {
                                    if !tenant.suspended {
                                        Button {
                                            variant: ButtonVariant::Destructive,
                                            size: ButtonSize::Small,
                                            onclick: {
                                                let id = tenant.id.clone();
                                                move |_| suspend(id.clone())
                                            },
                                            {t.translate("Suspend")}
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
}
