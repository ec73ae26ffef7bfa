use dioxus::prelude::*;
use shared_ui::{
    use_toast, Button, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle,
    PageHeader, SwitchField, ToastOptions,
};

use super::{DarkModeSwitch, LanguagePicker};
use crate::i18n::use_translator;
use crate::mock;
use crate::session::use_role;

/// A card of on/off settings with a save action. State is local to the page.
#[component]
fn ToggleCard(title_key: &'static str, keys: Vec<&'static str>, initial: Vec<bool>) -> Element {
    let t = use_translator();
    let toast = use_toast();
    let mut values = use_signal(move || initial.clone());

    rsx! {
        Card {
            CardHeader {
                CardTitle { {t.translate(title_key)} }
            }
            CardContent {
                for (i, key) in keys.into_iter().enumerate() {
                    SwitchField {
                        key: "{key}",
                        label: t.translate(key).to_string(),
                        checked: values.read().get(i).copied().unwrap_or(false),
                        on_change: move |on: bool| {
                            if let Some(slot) = values.write().get_mut(i) {
                                *slot = on;
                            }
                        },
                    }
                }
            }
            CardFooter {
                Button {
                    onclick: move |_| {
                        tracing::info!(section = title_key, values = ?*values.read(), "Settings saved");
                        toast.success(t.translate("Settings saved").to_string(), ToastOptions::new());
                    },
                    {t.translate("Save")}
                }
            }
        }
    }
}

/// Platform switches for the super admin.
#[component]
pub fn GlobalSettingsPage() -> Element {
    let t = use_translator();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("/assets/pages.css") }
        PageHeader { title: t.translate("Global Settings").to_string() }
        ToggleCard {
            title_key: "Global Settings",
            keys: vec!["Maintenance mode", "Allow new tenant sign-ups"],
            initial: vec![false, true],
        }
    }
}

#[component]
pub fn TenantSettings() -> Element {
    let t = use_translator();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("/assets/pages.css") }
        PageHeader { title: t.translate("Settings").to_string(), subtitle: mock::CURRENT_TENANT.to_string() }
        ToggleCard {
            title_key: "Settings",
            keys: vec!["E-mail notifications", "Auto-assign tickets"],
            initial: vec![true, false],
        }
    }
}

/// Personal preferences, open to every role.
#[component]
pub fn AccountSettingsPage() -> Element {
    let t = use_translator();
    let role = use_role();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("/assets/pages.css") }
        PageHeader { title: t.translate("Account Settings").to_string() }
        Card {
            CardHeader {
                CardTitle { {t.translate("Role")} }
                CardDescription {
                    {t.translate_with("Signed in as {role}", &[("role", t.translate(role.label()))])}
                }
            }
        }
        Card {
            CardHeader {
                CardTitle { {t.translate("Appearance")} }
            }
            CardContent {
                LanguagePicker {}
                DarkModeSwitch {}
            }
        }
    }
}
