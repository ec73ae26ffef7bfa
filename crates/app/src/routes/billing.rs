use dioxus::prelude::*;
use shared_types::Invoice;
use shared_ui::{
    use_toast, Badge, BadgeTone, Button, ButtonSize, ButtonVariant, Card, CardContent, DataTable,
    DataTableBody, DataTableCell, DataTableColumn, DataTableEmpty, DataTableHeader, DataTableRow,
    PageHeader, StatCard, StatGrid, ToastOptions,
};

use crate::format_helpers::format_peso;
use crate::i18n::use_translator;
use crate::mock;

fn outstanding(invoices: &[Invoice]) -> f64 {
    invoices.iter().filter(|i| !i.paid).map(|i| i.amount).sum()
}

/// Invoice list. With `on_refund` set, paid rows get an approve-refund action.
#[component]
fn InvoiceTable(
    invoices: Vec<Invoice>,
    #[props(default)] on_refund: Option<EventHandler<String>>,
) -> Element {
    let t = use_translator();
    let columns = if on_refund.is_some() { 5 } else { 4 };

    rsx! {
        DataTable {
            DataTableHeader {
                DataTableColumn { {t.translate("Invoice")} }
                DataTableColumn { {t.translate("Account")} }
                DataTableColumn { {t.translate("Amount")} }
                DataTableColumn { {t.translate("Status")} }
                if on_refund.is_some() {
                    DataTableColumn { "" }
                }
            }
            DataTableBody {
                if invoices.is_empty() {
                    DataTableEmpty { columns: columns, {t.translate("No records")} }
                }
                for invoice in invoices {
                    DataTableRow { key: "{invoice.number}",
                        DataTableCell { "{invoice.number}" }
                        DataTableCell { "{invoice.account}" }
                        DataTableCell { {format_peso(invoice.amount)} }
                        DataTableCell {
                            if invoice.paid {
                                Badge { tone: BadgeTone::Success, {t.translate("Paid")} }
                            } else {
                                Badge { tone: BadgeTone::Warning, {t.translate("Unpaid")} }
                            }
                        }
                        if let Some(handler) = on_refund {
                            DataTableCell {
                                if invoice.paid {
                                    Button {
                                        variant: ButtonVariant::Secondary,
                                        size: ButtonSize::Small,
                                        onclick: {
                                            let number = invoice.number.clone();
                                            move |_| handler.call(number.clone())
                                        },
                                        {t.translate("Approve Refund")}
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

/// Platform invoices across all tenants.
#[component]
pub fn PlatformBilling() -> Element {
    let t = use_translator();
    let invoices = mock::tenant_invoices();
    let due = outstanding(&invoices);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("/assets/pages.css") }
        PageHeader { title: t.translate("Billing").to_string() }
        StatGrid {
            StatCard { label: t.translate("Unpaid").to_string(), value: format_peso(due) }
        }
        Card {
            CardContent {
                InvoiceTable { invoices: invoices }
            }
        }
    }
}

/// Subscriber invoices of the tenant, with refund approval.
#[component]
pub fn TenantBilling() -> Element {
    let t = use_translator();
    let toast = use_toast();
    let invoices = mock::invoices();
    let due = outstanding(&invoices);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("/assets/pages.css") }
        PageHeader { title: t.translate("Billing").to_string() }
        StatGrid {
            StatCard { label: t.translate("Unpaid").to_string(), value: format_peso(due) }
        }
        Card {
            CardContent {
                InvoiceTable {
                    invoices: invoices,
                    on_refund: move |number: String| {
                        tracing::info!(invoice = %number, "Refund approved");
                        toast.success(
                            t.translate_with("Refund approved for {invoice}", &[("invoice", number.as_str())]),
                            ToastOptions::new(),
                        );
                    },
                }
            }
        }
    }
}

/// The signed-in customer's own bills.
#[component]
pub fn MyBilling() -> Element {
    let t = use_translator();
    let mine: Vec<_> = mock::invoices()
        .into_iter()
        .filter(|i| i.account == mock::CURRENT_CUSTOMER)
        .collect();
    let due = outstanding(&mine);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("/assets/pages.css") }
        PageHeader { title: t.translate("My Bills").to_string() }
        StatGrid {
            StatCard { label: t.translate("Next Payment Due").to_string(), value: format_peso(due) }
        }
        Card {
            CardContent {
                InvoiceTable { invoices: mine }
            }
        }
    }
}
