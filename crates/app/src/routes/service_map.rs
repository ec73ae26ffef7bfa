use dioxus::prelude::*;
use shared_types::{Ticket, TicketStatus};
use shared_ui::{Badge, BadgeTone, Card, CardContent, CardHeader, CardTitle, PageHeader};

use crate::i18n::use_translator;
use crate::mock;
use crate::routes::Route;

/// Cards for each job site, in visiting order.
#[component]
pub fn JobSites(jobs: Vec<Ticket>) -> Element {
    let t = use_translator();

    rsx! {
        Card {
            CardHeader {
                CardTitle { {t.translate("Job Sites")} }
            }
            CardContent {
                if jobs.is_empty() {
                    p { class: "muted", {t.translate("No records")} }
                }
                ol { class: "job-sites",
                    for (stop, job) in jobs.into_iter().enumerate() {
                        li {
                            key: "{job.id}",
                            class: "job-site",
                            onclick: {
                                let id = job.id.clone();
                                move |_| {
                                    navigator().push(Route::TicketDetail { id: id.clone() });
                                }
                            },
                            span { class: "job-site-stop", "{stop + 1}" }
                            div { class: "job-site-body",
                                strong { "{job.customer}" }
                                span { class: "muted", "{job.id} · {job.subject}" }
                            }
                            if job.status == TicketStatus::InProgress {
                                Badge { tone: BadgeTone::Info, {t.translate(job.status.label())} }
                            } else {
                                Badge { {t.translate(job.status.label())} }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Every open job in the technician's area, not only their own.
#[component]
pub fn ServiceMapPage() -> Element {
    let t = use_translator();
    let jobs: Vec<_> = mock::tickets()
        .into_iter()
        .filter(|x| x.status != TicketStatus::Resolved)
        .collect();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("/assets/pages.css") }
        PageHeader { title: t.translate("Service Map").to_string() }
        JobSites { jobs: jobs }
    }
}
