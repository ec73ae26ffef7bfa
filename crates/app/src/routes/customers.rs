use dioxus::prelude::*;
use shared_types::Customer;
use shared_ui::{
    Badge, BadgeTone, Card, CardContent, DataTable, DataTableBody, DataTableCell, DataTableColumn,
    DataTableEmpty, DataTableHeader, DataTableRow, Input, PageHeader,
};

use crate::i18n::use_translator;
use crate::mock;
use crate::routes::tickets::TicketTable;
use crate::routes::Route;

/// Case-insensitive match on name, e-mail or customer number.
fn matches_query(customer: &Customer, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }
    [&customer.name, &customer.email, &customer.id]
        .iter()
        .any(|field| field.to_lowercase().contains(&query))
}

#[component]
fn CustomerTable(customers: Vec<Customer>) -> Element {
    let t = use_translator();

    rsx! {
        DataTable {
            DataTableHeader {
                DataTableColumn { {t.translate("Name")} }
                DataTableColumn { {t.translate("Email")} }
                DataTableColumn { {t.translate("Plan")} }
                DataTableColumn { {t.translate("Status")} }
            }
            DataTableBody {
                if customers.is_empty() {
                    DataTableEmpty { columns: 4, {t.translate("No records")} }
                }
                for customer in customers {
                    DataTableRow {
                        key: "{customer.id}",
                        onclick: {
                            let id = customer.id.clone();
                            move |_| {
                                navigator().push(Route::CustomerDetail { id: id.clone() });
                            }
                        },
                        DataTableCell { "{customer.name}" }
                        DataTableCell { "{customer.email}" }
                        DataTableCell { "{customer.plan}" }
                        DataTableCell {
                            if customer.active {
                                Badge { tone: BadgeTone::Success, {t.translate("Active")} }
                            } else {
                                Badge { {t.translate("Inactive")} }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Subscriber list for tenant administrators.
#[component]
pub fn CustomerManagement() -> Element {
    let t = use_translator();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("/assets/pages.css") }
        PageHeader { title: t.translate("Customers").to_string() }
        Card {
            CardContent {
                CustomerTable { customers: mock::customers() }
            }
        }
    }
}

/// Searchable customer list for support agents.
#[component]
pub fn CustomerLookup() -> Element {
    let t = use_translator();
    let mut query = use_signal(String::new);

    let found: Vec<_> = mock::customers()
        .into_iter()
        .filter(|c| matches_query(c, &query.read()))
        .collect();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("/assets/pages.css") }
        PageHeader { title: t.translate("Customers").to_string() }
        Card {
            CardContent {
                Input {
                    input_type: "search",
                    placeholder: t.translate("Search customers").to_string(),
                    value: query(),
                    on_input: move |e: FormEvent| query.set(e.value()),
                }
                CustomerTable { customers: found }
            }
        }
    }
}

#[component]
pub fn CustomerProfile(id: String) -> Element {
    let t = use_translator();
    let customer = mock::customers().into_iter().find(|c| c.id == id);

    let Some(customer) = customer else {
        return rsx! {
            PageHeader { title: t.translate("Customer Profile").to_string(), subtitle: id }
            p { class: "muted", {t.translate("No records")} }
        };
    };
    let tickets: Vec<_> = mock::tickets()
        .into_iter()
        .filter(|x| x.customer == customer.name)
        .collect();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("/assets/pages.css") }
        PageHeader { title: customer.name.clone(), subtitle: customer.id.clone() }
        Card {
            CardContent {
                dl { class: "detail-list",
                    dt { {t.translate("Email")} }
                    dd { "{customer.email}" }
                    dt { {t.translate("Plan")} }
                    dd { "{customer.plan}" }
                    dt { {t.translate("Status")} }
                    dd {
                        if customer.active {
                            {t.translate("Active")}
                        } else {
                            {t.translate("Inactive")}
                        }
                    }
                }
            }
        }
        Card {
            CardContent {
                TicketTable { tickets: tickets }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ana() -> Customer {
        mock::customers()
            .into_iter()
            .find(|c| c.name == mock::CURRENT_CUSTOMER)
            .unwrap()
    }

    #[test]
    fn query_matches_any_field_ignoring_case() {
        let customer = ana();
        assert!(matches_query(&customer, ""));
        assert!(matches_query(&customer, "  "));
        assert!(matches_query(&customer, "REYES"));
        assert!(matches_query(&customer, "example.ph"));
        assert!(matches_query(&customer, &customer.id.to_lowercase()));
        assert!(!matches_query(&customer, "zzz"));
    }
}
