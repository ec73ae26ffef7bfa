pub mod audit;
pub mod billing;
pub mod customers;
pub mod dashboard;
pub mod devices;
pub mod forbidden;
pub mod not_found;
pub mod plans;
pub mod reports;
pub mod service_map;
pub mod settings;
pub mod tenants;
pub mod tickets;
pub mod view_host;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBuilding, LdCreditCard, LdFileText, LdGlobe, LdLayoutDashboard, LdMap, LdPackage, LdServer,
    LdSettings, LdShield, LdTicket, LdUserCheck, LdUsers,
};
use dioxus_free_icons::Icon;
use netdesk_core::navigation::{is_active, navigation_for};
use netdesk_core::resolve;
use shared_types::{
    FeatureFlags, Language, NavIcon, Role, RouteOutcome, ThemeMode, ALL_LANGUAGES, ALL_ROLES,
};
use shared_ui::theme::ThemeState;
use shared_ui::{
    use_toast, Button, ButtonVariant, FormSelect, Sidebar, SidebarContent, SidebarFooter,
    SidebarGroup, SidebarHeader, SidebarInset, SidebarMenu, SidebarMenuButton, SidebarMenuItem,
    SidebarProvider, SidebarSeparator, SidebarTrigger, SwitchField, ToastOptions,
};

use crate::i18n::{use_prefs, use_translator};
use crate::session::use_session;
use not_found::NotFound;
use view_host::RoleScopedView;

/// Application routes. Every page inside the layout is mounted through
/// [`RoleScopedView`], which asks the central router what the current role
/// may see at the URL.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/")]
    Dashboard {},
    #[route("/tenants")]
    Tenants {},
    #[route("/customers")]
    Customers {},
    #[route("/customers/:id")]
    CustomerDetail { id: String },
    #[route("/tickets")]
    Tickets {},
    #[route("/tickets/:id")]
    TicketDetail { id: String },
    #[route("/map")]
    ServiceMap {},
    #[route("/devices")]
    Devices {},
    #[route("/plans")]
    Plans {},
    #[route("/billing")]
    Billing {},
    #[route("/reports")]
    Reports {},
    #[route("/audit")]
    Audit {},
    #[route("/global-settings")]
    GlobalSettings {},
    #[route("/settings")]
    Settings {},
    #[route("/account-settings")]
    AccountSettings {},
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

fn nav_icon(icon: NavIcon) -> Element {
    match icon {
        NavIcon::Dashboard => rsx! { Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 } },
        NavIcon::Tenants => rsx! { Icon::<LdBuilding> { icon: LdBuilding, width: 18, height: 18 } },
        NavIcon::Customers => rsx! { Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 } },
        NavIcon::Tickets => rsx! { Icon::<LdTicket> { icon: LdTicket, width: 18, height: 18 } },
        NavIcon::Map => rsx! { Icon::<LdMap> { icon: LdMap, width: 18, height: 18 } },
        NavIcon::Devices => rsx! { Icon::<LdServer> { icon: LdServer, width: 18, height: 18 } },
        NavIcon::Plans => rsx! { Icon::<LdPackage> { icon: LdPackage, width: 18, height: 18 } },
        NavIcon::Billing => rsx! { Icon::<LdCreditCard> { icon: LdCreditCard, width: 18, height: 18 } },
        NavIcon::Reports => rsx! { Icon::<LdFileText> { icon: LdFileText, width: 18, height: 18 } },
        NavIcon::Audit => rsx! { Icon::<LdShield> { icon: LdShield, width: 18, height: 18 } },
        NavIcon::GlobalSettings => rsx! { Icon::<LdGlobe> { icon: LdGlobe, width: 18, height: 18 } },
        NavIcon::Settings => rsx! { Icon::<LdSettings> { icon: LdSettings, width: 18, height: 18 } },
        NavIcon::Account => rsx! { Icon::<LdUserCheck> { icon: LdUserCheck, width: 18, height: 18 } },
    }
}

/// Translation key of the navbar title for a resolved route.
fn title_key(outcome: &RouteOutcome) -> &'static str {
    match outcome {
        RouteOutcome::View(m) => m.view.title_key(),
        RouteOutcome::Forbidden { .. } => "Access Denied",
        RouteOutcome::NotFound { .. } => "Page Not Found",
    }
}

/// Main app layout: role-filtered sidebar, top bar and the routed page.
#[component]
fn AppLayout() -> Element {
    let route: Route = use_route();
    let current_path = route.to_string();
    let mut session = use_session();
    let role = session.role();
    let t = use_translator();
    let flags: FeatureFlags = use_context();

    let entries = navigation_for(role);
    let title = t.translate(title_key(&resolve(role, &current_path)));
    let signed_in = t.translate_with("Signed in as {role}", &[("role", t.translate(role.label()))]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        SidebarProvider { default_open: false,
            Sidebar {
                SidebarHeader {
                    div { class: "sidebar-brand",
                        span { class: "sidebar-brand-name", "NetDesk" }
                        span { class: "sidebar-brand-role", {t.translate(role.label())} }
                    }
                }

                SidebarSeparator {}

                SidebarContent {
                    SidebarGroup {
                        SidebarMenu {
                            for entry in entries {
                                SidebarMenuItem { key: "{entry.path}",
                                    SidebarMenuButton {
                                        active: is_active(entry.path, &current_path),
                                        onclick: move |_| {
                                            if let Ok(target) = entry.path.parse::<Route>() {
                                                navigator().push(target);
                                            }
                                        },
                                        {nav_icon(entry.icon)}
                                        span { {t.translate(entry.label_key)} }
                                    }
                                }
                            }
                        }
                    }
                }

                SidebarFooter {
                    DarkModeSwitch {}
                }
            }

            SidebarInset {
                header { class: "topbar",
                    SidebarTrigger {
                        span { class: "topbar-trigger-icon", "\u{2630}" }
                    }
                    span { class: "topbar-title", "{title}" }
                    div { class: "topbar-spacer" }

                    if flags.role_switcher {
                        FormSelect {
                            label: t.translate("Role").to_string(),
                            value: role.as_str().to_string(),
                            onchange: move |evt: FormEvent| {
                                if let Some(next) = Role::parse(&evt.value()) {
                                    session.set_role(next);
                                }
                            },
                            for r in ALL_ROLES {
                                option {
                                    key: "{r.as_str()}",
                                    value: r.as_str(),
                                    selected: *r == role,
                                    {t.translate(r.label())}
                                }
                            }
                        }
                    }

                    if flags.language_picker {
                        LanguagePicker {}
                    }

                    span { class: "topbar-user", "{signed_in}" }

                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| {
                            session.logout();
                            navigator().push(Route::Dashboard {});
                        },
                        {t.translate("Logout")}
                    }
                }

                div { class: "page-content",
                    Outlet::<Route> {}
                }
            }
        }
    }
}

/// Language select shared by the top bar and the account settings page.
#[component]
pub fn LanguagePicker() -> Element {
    let mut prefs = use_prefs();
    let t = use_translator();
    let toast = use_toast();
    let current = t.language();

    rsx! {
        FormSelect {
            label: t.translate("Language").to_string(),
            value: current.as_str().to_string(),
            onchange: move |evt: FormEvent| {
                let Some(next) = Language::parse(&evt.value()) else {
                    return;
                };
                if let Err(e) = prefs.set_language(next) {
                    tracing::warn!(error = %e, "Language not saved");
                    let t = prefs.translator();
                    toast.error(t.translate("Could not save preference").to_string(), ToastOptions::new());
                }
            },
            for lang in ALL_LANGUAGES {
                option {
                    key: "{lang.as_str()}",
                    value: lang.as_str(),
                    selected: *lang == current,
                    {lang.native_name()}
                }
            }
        }
    }
}

/// Dark mode toggle. Applies at once and persists the choice.
#[component]
pub fn DarkModeSwitch() -> Element {
    let mut prefs = use_prefs();
    let mut theme_state: ThemeState = use_context();
    let t = use_translator();
    let toast = use_toast();

    rsx! {
        SwitchField {
            label: t.translate("Dark Mode").to_string(),
            checked: (theme_state.is_dark)(),
            on_change: move |dark: bool| {
                theme_state.is_dark.set(dark);
                if let Err(e) = prefs.set_theme(ThemeMode::from_dark(dark)) {
                    tracing::warn!(error = %e, "Theme not saved");
                    toast.error(t.translate("Could not save preference").to_string(), ToastOptions::new());
                }
            },
        }
    }
}

// Route components. Each one hands the URL to the role-scoped router.

#[component]
fn Dashboard() -> Element {
    rsx! { RoleScopedView {} }
}

#[component]
fn Tenants() -> Element {
    rsx! { RoleScopedView {} }
}

#[component]
fn Customers() -> Element {
    rsx! { RoleScopedView {} }
}

#[component]
fn CustomerDetail(id: String) -> Element {
    rsx! { RoleScopedView { key: "{id}" } }
}

#[component]
fn Tickets() -> Element {
    rsx! { RoleScopedView {} }
}

#[component]
fn TicketDetail(id: String) -> Element {
    rsx! { RoleScopedView { key: "{id}" } }
}

#[component]
fn ServiceMap() -> Element {
    rsx! { RoleScopedView {} }
}

#[component]
fn Devices() -> Element {
    rsx! { RoleScopedView {} }
}

#[component]
fn Plans() -> Element {
    rsx! { RoleScopedView {} }
}

#[component]
fn Billing() -> Element {
    rsx! { RoleScopedView {} }
}

#[component]
fn Reports() -> Element {
    rsx! { RoleScopedView {} }
}

#[component]
fn Audit() -> Element {
    rsx! { RoleScopedView {} }
}

#[component]
fn GlobalSettings() -> Element {
    rsx! { RoleScopedView {} }
}

#[component]
fn Settings() -> Element {
    rsx! { RoleScopedView {} }
}

#[component]
fn AccountSettings() -> Element {
    rsx! { RoleScopedView {} }
}
