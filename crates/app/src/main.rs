use dioxus::prelude::*;
use netdesk_core::{Preferences, Session};
use shared_types::FeatureFlags;

mod format_helpers;
mod i18n;
mod mock;
mod routes;
mod session;
mod storage;
mod validation;

use i18n::PrefsState;
use routes::Route;
use session::SessionState;

const THEME_BASE: Asset = asset!("/assets/theme-base.css");

fn main() {
    #[cfg(feature = "web")]
    netdesk_core::config::load_config_from_str(include_str!("../../../config.toml"));
    #[cfg(not(feature = "web"))]
    netdesk_core::config::load_config();

    dioxus::launch(App);
}

/// Detect the client platform from compile-time feature flags.
pub fn client_platform() -> &'static str {
    if cfg!(feature = "web") {
        "web"
    } else if cfg!(feature = "desktop") {
        "desktop"
    } else if cfg!(feature = "mobile") {
        "mobile"
    } else {
        "unknown"
    }
}

#[component]
fn App() -> Element {
    let config = netdesk_core::config::app_config();

    use_context_provider::<FeatureFlags>(|| config.features);

    use_context_provider(|| {
        tracing::info!(
            platform = client_platform(),
            role = config.session.default_role.as_str(),
            "Starting session"
        );
        SessionState::new(Session::new(config.session.default_role))
    });

    let prefs = use_context_provider(|| {
        let prefs = Preferences::load(storage::open_store(config), config.i18n.default_language);
        PrefsState::new(prefs)
    });

    use_context_provider(|| shared_ui::theme::ThemeState::new(prefs.theme().is_dark()));

    // The web build starts from defaults; stored values arrive asynchronously.
    #[cfg(feature = "web")]
    storage::use_restore_browser_prefs(config.i18n.default_language);

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_BASE }
        shared_ui::theme::ThemeSeed {}
        shared_ui::ToastProvider {
            Router::<Route> {}
        }
    }
}
