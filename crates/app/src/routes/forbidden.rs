use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdLock;
use dioxus_free_icons::Icon;
use shared_types::Role;

use crate::i18n::use_translator;
use crate::routes::Route;

/// Shown when the path exists but the current role has no view for it.
#[component]
pub fn Forbidden(path: String, role: Role) -> Element {
    let t = use_translator();
    let message = t.translate_with(
        "Your role ({role}) cannot open {path}.",
        &[("role", t.translate(role.label())), ("path", path.as_str())],
    );

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./status_page.css") }

        div { class: "status-page", "data-status": "403",
            div { class: "status-card",
                div { class: "status-icon",
                    Icon::<LdLock> { icon: LdLock, width: 32, height: 32 }
                }
                div { class: "status-code", "403" }
                h1 { class: "status-title", {t.translate("Access Denied")} }
                p { class: "status-message", "{message}" }
                Link { to: Route::Dashboard {}, class: "status-link",
                    {t.translate("Back to Dashboard")}
                }
            }
        }
    }
}
