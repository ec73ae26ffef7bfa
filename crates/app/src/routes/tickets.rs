use dioxus::prelude::*;
use shared_types::{AppError, NewTicketForm, Ticket, TicketPriority, TicketStatus};
use shared_ui::{
    use_toast, Badge, BadgeTone, Button, Card, CardContent, CardFooter, CardHeader, CardTitle,
    DataTable, DataTableBody, DataTableCell, DataTableColumn, DataTableEmpty, DataTableHeader,
    DataTableRow, Input, PageHeader, Textarea, ToastOptions,
};
use uuid::Uuid;

use crate::i18n::use_translator;
use crate::mock;
use crate::routes::Route;
use crate::validation::{check, field_error};

fn priority_tone(priority: TicketPriority) -> BadgeTone {
    match priority {
        TicketPriority::Critical => BadgeTone::Danger,
        TicketPriority::High => BadgeTone::Warning,
        TicketPriority::Medium => BadgeTone::Info,
        TicketPriority::Low => BadgeTone::Neutral,
    }
}

fn status_tone(status: TicketStatus) -> BadgeTone {
    match status {
        TicketStatus::Open => BadgeTone::Warning,
        TicketStatus::InProgress => BadgeTone::Info,
        TicketStatus::Resolved => BadgeTone::Success,
    }
}

/// Short ticket number, e.g. `TCK-3F9A2C`.
fn new_ticket_id() -> String {
    let id = Uuid::new_v4().simple().to_string();
    format!("TCK-{}", id[..6].to_uppercase())
}

/// Column header keys of [`TicketTable`].
const TICKET_COLUMNS: [&str; 6] = ["ID", "Subject", "Customer", "Priority", "Status", "Assignee"];

/// Ticket list; rows open the ticket detail page.
#[component]
pub fn TicketTable(tickets: Vec<Ticket>) -> Element {
    let t = use_translator();

    rsx! {
        DataTable {
            DataTableHeader {
                for column in TICKET_COLUMNS {
                    DataTableColumn { key: "{column}", {t.translate(column)} }
                }
            }
            DataTableBody {
                if tickets.is_empty() {
                    DataTableEmpty { columns: 6, {t.translate("No records")} }
                }
                for ticket in tickets {
                    DataTableRow {
                        key: "{ticket.id}",
                        onclick: {
                            let id = ticket.id.clone();
                            move |_| {
                                navigator().push(Route::TicketDetail { id: id.clone() });
                            }
                        },
                        DataTableCell { "{ticket.id}" }
                        DataTableCell { "{ticket.subject}" }
                        DataTableCell { "{ticket.customer}" }
                        DataTableCell {
                            Badge { tone: priority_tone(ticket.priority), {t.translate(ticket.priority.label())} }
                        }
                        DataTableCell {
                            Badge { tone: status_tone(ticket.status), {t.translate(ticket.status.label())} }
                        }
                        DataTableCell {
                            match &ticket.assignee {
                                Some(name) => rsx! { "{name}" },
                                None => rsx! { {t.translate("Unassigned")} },
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Ticket creation form. Valid submissions are handed to `on_created`.
#[component]
fn NewTicketCard(
    #[props(default)] customer_email: String,
    on_created: EventHandler<Ticket>,
) -> Element {
    let t = use_translator();
    let toast = use_toast();

    let mut subject = use_signal(String::new);
    let mut email = use_signal(move || customer_email.clone());
    let mut description = use_signal(String::new);
    let mut errors = use_signal(|| None::<AppError>);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let form = NewTicketForm {
            subject: subject.read().trim().to_string(),
            customer_email: email.read().trim().to_string(),
            description: description.read().clone(),
        };
        match check(&form) {
            Ok(()) => {
                let ticket = Ticket {
                    id: new_ticket_id(),
                    subject: form.subject,
                    customer: form.customer_email,
                    priority: TicketPriority::Medium,
                    status: TicketStatus::Open,
                    assignee: None,
                };
                tracing::info!(id = %ticket.id, "Ticket created");
                toast.success(
                    t.translate_with("Ticket {id} created", &[("id", ticket.id.as_str())]),
                    ToastOptions::new(),
                );
                errors.set(None);
                subject.set(String::new());
                description.set(String::new());
                on_created.call(ticket);
            }
            Err(e) => {
                toast.error(t.translate(&e.toast_message()).to_string(), ToastOptions::new());
                errors.set(Some(e));
            }
        }
    };

    rsx! {
        Card {
            form { onsubmit: submit,
                CardHeader {
                    CardTitle { {t.translate("Create Ticket")} }
                }
                CardContent {
                    Input {
                        label: t.translate("Subject").to_string(),
                        value: subject(),
                        on_input: move |e: FormEvent| subject.set(e.value()),
                        error: field_error(&errors.read(), t, "subject"),
                    }
                    Input {
                        label: t.translate("Customer e-mail").to_string(),
                        input_type: "email",
                        value: email(),
                        on_input: move |e: FormEvent| email.set(e.value()),
                        error: field_error(&errors.read(), t, "customer_email"),
                    }
                    Textarea {
                        label: t.translate("Description").to_string(),
                        value: description(),
                        on_input: move |e: FormEvent| description.set(e.value()),
                    }
                }
                CardFooter {
                    Button { button_type: "submit", {t.translate("Create Ticket")} }
                }
            }
        }
    }
}

/// Shared body of the ticket list pages: title, optional create form, table.
#[component]
fn TicketListPage(
    title_key: &'static str,
    tickets: Vec<Ticket>,
    #[props(default)] creator_email: Option<String>,
) -> Element {
    let t = use_translator();
    let mut rows = use_signal(move || tickets.clone());

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("/assets/pages.css") }
        PageHeader { title: t.translate(title_key).to_string() }
        if let Some(email) = creator_email {
            NewTicketCard {
                customer_email: email,
                on_created: move |ticket: Ticket| rows.write().insert(0, ticket),
            }
        }
        Card {
            CardContent {
                TicketTable { tickets: rows() }
            }
        }
    }
}

/// All tenant tickets for admins and support agents.
#[component]
pub fn TicketQueue() -> Element {
    rsx! {
        TicketListPage { title_key: "Tickets", tickets: mock::tickets(), creator_email: String::new() }
    }
}

/// Open jobs assigned to the signed-in technician.
#[component]
pub fn AssignedJobs() -> Element {
    let jobs: Vec<_> = mock::tickets()
        .into_iter()
        .filter(|x| x.assignee.as_deref() == Some(mock::CURRENT_TECHNICIAN))
        .collect();
    rsx! {
        TicketListPage { title_key: "Assigned Jobs", tickets: jobs }
    }
}

/// High-priority tickets that may indicate a network incident.
#[component]
pub fn IncidentTickets() -> Element {
    let incidents: Vec<_> = mock::tickets()
        .into_iter()
        .filter(|x| matches!(x.priority, TicketPriority::High | TicketPriority::Critical))
        .collect();
    rsx! {
        TicketListPage { title_key: "Tickets", tickets: incidents }
    }
}

/// The customer's own tickets, with a form to open a new one.
#[component]
pub fn MyTickets() -> Element {
    let mine: Vec<_> = mock::tickets()
        .into_iter()
        .filter(|x| x.customer == mock::CURRENT_CUSTOMER)
        .collect();
    rsx! {
        TicketListPage {
            title_key: "My Tickets",
            tickets: mine,
            creator_email: mock::CURRENT_CUSTOMER_EMAIL.to_string(),
        }
    }
}

#[component]
pub fn TicketDetailPage(id: String) -> Element {
    let t = use_translator();
    let ticket = mock::tickets().into_iter().find(|x| x.id == id);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("/assets/pages.css") }
        PageHeader { title: t.translate("Ticket Details").to_string(), subtitle: id.clone() }
        Card {
            CardContent {
                match ticket {
                    Some(ticket) => rsx! {
                        dl { class: "detail-list",
                            dt { {t.translate("Subject")} }
                            dd { "{ticket.subject}" }
                            dt { {t.translate("Customer")} }
                            dd { "{ticket.customer}" }
                            dt { {t.translate("Priority")} }
                            dd { Badge { tone: priority_tone(ticket.priority), {t.translate(ticket.priority.label())} } }
                            dt { {t.translate("Status")} }
                            dd { Badge { tone: status_tone(ticket.status), {t.translate(ticket.status.label())} } }
                            dt { {t.translate("Assignee")} }
                            dd { {ticket.assignee.clone().unwrap_or_else(|| t.translate("Unassigned").to_string())} }
                        }
                    },
                    None => rsx! {
                        p { class: "muted", {t.translate("No records")} }
                    },
                }
            }
        }
    }
}
