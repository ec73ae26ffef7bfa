use dioxus::prelude::*;

use crate::i18n::use_translator;
use crate::routes::Route;

/// Catch-all route for URLs the typed router cannot parse.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));
    rsx! { NotFoundView { path: path } }
}

/// 404 page body, also used when the role-scoped router finds no rule.
#[component]
pub fn NotFoundView(path: String) -> Element {
    let t = use_translator();
    let message = t.translate_with("The page {path} could not be found.", &[("path", path.as_str())]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./status_page.css") }

        div { class: "status-page", "data-status": "404",
            div { class: "status-card",
                div { class: "status-code", "404" }
                h1 { class: "status-title", {t.translate("Page Not Found")} }
                p { class: "status-message", "{message}" }
                Link { to: Route::Dashboard {}, class: "status-link",
                    {t.translate("Back to Dashboard")}
                }
            }
        }
    }
}
