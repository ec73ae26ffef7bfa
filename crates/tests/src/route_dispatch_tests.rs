use netdesk_core::router::{dashboard_for, find_rule};
use netdesk_core::{resolve, ROUTES};
use pretty_assertions::assert_eq;
use shared_types::{Role, RouteMatch, RouteOutcome, ViewId, ALL_ROLES};

use crate::common::ALL_VIEWS;

#[test]
fn test_audit_dispatch_per_role() {
    assert_eq!(resolve(Role::SuperAdmin, "/audit").view(), Some(ViewId::GlobalAuditLogs));
    assert_eq!(resolve(Role::SystemAdmin, "/audit").view(), Some(ViewId::TenantAuditLog));

    let outcome = resolve(Role::Customer, "/audit");
    assert_eq!(outcome.view(), None);
    assert_eq!(
        outcome,
        RouteOutcome::Forbidden {
            path: "/audit".into(),
            role: Role::Customer,
        }
    );
}

#[test]
fn test_every_role_gets_its_own_dashboard() {
    let mut seen = Vec::new();
    for role in ALL_ROLES {
        let view = resolve(*role, "/").view().unwrap();
        assert_eq!(view, dashboard_for(*role));
        assert!(view.is_dashboard());
        assert!(!seen.contains(&view), "{view:?} shared by two roles");
        seen.push(view);
    }
}

#[test]
fn test_every_view_is_reachable() {
    for view in ALL_VIEWS {
        let reachable = ROUTES.iter().any(|rule| {
            ALL_ROLES.iter().any(|role| rule.view_for(*role) == Some(*view))
        });
        assert!(reachable, "{view:?} is never mounted");
    }
}

#[test]
fn test_detail_routes_capture_id() {
    assert_eq!(
        resolve(Role::CustomerSupport, "/customers/CUS-2001/"),
        RouteOutcome::View(RouteMatch {
            view: ViewId::CustomerProfile,
            id: Some("CUS-2001".into()),
        })
    );
    assert_eq!(
        resolve(Role::Customer, "/tickets/TCK-1004?tab=history"),
        RouteOutcome::View(RouteMatch {
            view: ViewId::TicketDetail,
            id: Some("TCK-1004".into()),
        })
    );
}

#[test]
fn test_super_admin_has_no_ticket_pages() {
    assert!(resolve(Role::SuperAdmin, "/tickets").is_forbidden());
    assert!(resolve(Role::SuperAdmin, "/tickets/TCK-1001").is_forbidden());
}

#[test]
fn test_unknown_and_forbidden_are_distinct() {
    let unknown = resolve(Role::SuperAdmin, "/tickets-archive");
    assert_eq!(
        unknown,
        RouteOutcome::NotFound {
            path: "/tickets-archive".into()
        }
    );
    assert!(find_rule("/tickets-archive").is_none());
    assert!(find_rule("/tenants").is_some());
    assert!(resolve(Role::It, "/tenants").is_forbidden());
}

#[test]
fn test_shared_path_variants_are_role_specific() {
    let cases = [
        (Role::SystemAdmin, "/plans", ViewId::ServicePlans),
        (Role::SuperAdmin, "/plans", ViewId::SubscriptionPlans),
        (Role::Customer, "/plans", ViewId::AvailablePlans),
        (Role::SuperAdmin, "/billing", ViewId::PlatformBilling),
        (Role::CustomerSupport, "/billing", ViewId::TenantBilling),
        (Role::It, "/tickets", ViewId::IncidentTickets),
        (Role::FieldTechnician, "/tickets", ViewId::AssignedJobs),
    ];
    for (role, path, expected) in cases {
        assert_eq!(resolve(role, path).view(), Some(expected), "{role} at {path}");
    }
}
