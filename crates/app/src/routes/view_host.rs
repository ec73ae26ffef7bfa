use dioxus::prelude::*;
use netdesk_core::resolve;
use shared_types::{RouteOutcome, ViewId};

use super::forbidden::Forbidden;
use super::not_found::NotFoundView;
use super::Route;
use super::{audit, billing, customers, dashboard, devices, plans, reports, service_map, settings, tenants, tickets};
use crate::session::use_role;

/// Resolve the current URL for the current role and mount the result.
///
/// Re-renders on role change, so switching roles on a page the new role may
/// not open shows [`Forbidden`] in place.
#[component]
pub fn RoleScopedView() -> Element {
    let route: Route = use_route();
    let role = use_role();

    render_outcome(resolve(role, &route.to_string()))
}

fn render_outcome(outcome: RouteOutcome) -> Element {
    match outcome {
        RouteOutcome::View(matched) => mount(matched.view, matched.id),
        RouteOutcome::Forbidden { path, role } => rsx! { Forbidden { path: path, role: role } },
        RouteOutcome::NotFound { path } => rsx! { NotFoundView { path: path } },
    }
}

fn mount(view: ViewId, id: Option<String>) -> Element {
    let id = id.unwrap_or_default();
    match view {
        ViewId::SuperAdminDashboard => rsx! { dashboard::SuperAdminDashboard {} },
        ViewId::SystemAdminDashboard => rsx! { dashboard::SystemAdminDashboard {} },
        ViewId::CustomerSupportDashboard => rsx! { dashboard::CustomerSupportDashboard {} },
        ViewId::TechnicianMapView => rsx! { dashboard::TechnicianMapView {} },
        ViewId::ItOperationsDashboard => rsx! { dashboard::ItOperationsDashboard {} },
        ViewId::CustomerPortalDashboard => rsx! { dashboard::CustomerPortalDashboard {} },

        ViewId::TenantManagement => rsx! { tenants::TenantManagement {} },
        ViewId::CustomerManagement => rsx! { customers::CustomerManagement {} },
        ViewId::CustomerLookup => rsx! { customers::CustomerLookup {} },
        ViewId::CustomerProfile => rsx! { customers::CustomerProfile { id: id } },
        ViewId::TicketQueue => rsx! { tickets::TicketQueue {} },
        ViewId::AssignedJobs => rsx! { tickets::AssignedJobs {} },
        ViewId::IncidentTickets => rsx! { tickets::IncidentTickets {} },
        ViewId::MyTickets => rsx! { tickets::MyTickets {} },
        ViewId::TicketDetail => rsx! { tickets::TicketDetailPage { id: id } },
        ViewId::ServiceMap => rsx! { service_map::ServiceMapPage {} },
        ViewId::DeviceInventory => rsx! { devices::DeviceInventory {} },
        ViewId::FieldEquipment => rsx! { devices::FieldEquipment {} },
        ViewId::SubscriptionPlans => rsx! { plans::SubscriptionPlans {} },
        ViewId::ServicePlans => rsx! { plans::ServicePlans {} },
        ViewId::AvailablePlans => rsx! { plans::AvailablePlans {} },
        ViewId::PlatformBilling => rsx! { billing::PlatformBilling {} },
        ViewId::TenantBilling => rsx! { billing::TenantBilling {} },
        ViewId::MyBilling => rsx! { billing::MyBilling {} },
        ViewId::Reports => rsx! { reports::ReportsPage {} },
        ViewId::GlobalAuditLogs => rsx! { audit::GlobalAuditLogs {} },
        ViewId::TenantAuditLog => rsx! { audit::TenantAuditLog {} },
        ViewId::GlobalSettings => rsx! { settings::GlobalSettingsPage {} },
        ViewId::TenantSettings => rsx! { settings::TenantSettings {} },
        ViewId::AccountSettings => rsx! { settings::AccountSettingsPage {} },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::PrefsState;
    use crate::session::SessionState;
    use netdesk_core::{MemoryStore, PreferenceStore, Preferences, Session};
    use shared_types::{Language, Role};

    #[derive(Clone)]
    struct Resolved(RouteOutcome);

    /// Status pages link home, so they need a router above them.
    #[derive(Routable, Clone, PartialEq, Debug)]
    #[rustfmt::skip]
    enum StatusRoute {
        #[route("/:..segments")]
        StatusHost { segments: Vec<String> },
    }

    #[component]
    fn StatusHost(segments: Vec<String>) -> Element {
        let _ = segments;
        render_outcome(use_context::<Resolved>().0)
    }

    #[component]
    fn Harness(role: Role, path: String, routed: bool) -> Element {
        use_context_provider(|| SessionState::new(Session::new(role)));
        use_context_provider(|| {
            let store: Box<dyn PreferenceStore> = Box::new(MemoryStore::new());
            PrefsState::new(Preferences::load(store, Language::English))
        });
        let outcome = use_context_provider(|| Resolved(resolve(role, &path))).0;
        if routed {
            rsx! { Router::<StatusRoute> {} }
        } else {
            render_outcome(outcome)
        }
    }

    fn render_with(role: Role, path: &str, routed: bool) -> String {
        let mut dom = VirtualDom::new_with_props(
            Harness,
            HarnessProps {
                role,
                path: path.to_string(),
                routed,
            },
        );
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    fn render(role: Role, path: &str) -> String {
        render_with(role, path, false)
    }

    #[test]
    fn each_role_gets_its_own_dashboard() {
        // (role, text only that dashboard shows, text it must not show)
        let cases = [
            (Role::SuperAdmin, "Active Tenants", "Jobs Today"),
            (Role::SystemAdmin, "Active Subscribers", "Active Tenants"),
            (Role::CustomerSupport, "Open Tickets", "Active Subscribers"),
            (Role::FieldTechnician, "Jobs Today", "Open Tickets"),
            (Role::It, "Network Uptime", "Jobs Today"),
            (Role::Customer, "Current Plan", "Network Uptime"),
        ];
        for (role, shown, hidden) in cases {
            let html = render(role, "/");
            assert!(html.contains(shown), "{role:?} dashboard lacks {shown}");
            assert!(!html.contains(hidden), "{role:?} dashboard shows {hidden}");
        }
    }

    #[test]
    fn audit_variant_follows_role() {
        let global = render(Role::SuperAdmin, "/audit");
        assert!(global.contains(">Tenant<"));
        assert!(!global.contains("page-subtitle"));

        let tenant = render(Role::SystemAdmin, "/audit");
        assert!(!tenant.contains(">Tenant<"));
        assert!(tenant.contains("page-subtitle"));
        assert!(tenant.contains(crate::mock::CURRENT_TENANT));
    }

    #[test]
    fn forbidden_path_renders_403() {
        let html = render_with(Role::Customer, "/audit", true);
        assert!(html.contains(r#"data-status="403""#));
        assert!(html.contains("Access Denied"));
        assert!(!html.contains("page-header"));
    }

    #[test]
    fn unknown_path_renders_404() {
        let html = render_with(Role::SuperAdmin, "/tickets-archive", true);
        assert!(html.contains(r#"data-status="404""#));
    }
}
