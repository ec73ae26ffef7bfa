//! Central role-scoped router.
//!
//! One declarative table decides, for every path and role, which view is
//! mounted. A known path without a variant for the role resolves to
//! `Forbidden`; an unknown path to `NotFound`.

use shared_types::{Role, RouteMatch, RouteOutcome, ViewId};

use Role::*;

/// A path pattern and the views it mounts per role.
///
/// Patterns are `/`-separated literals; a `:id` segment matches any single
/// non-empty segment and is captured into [`RouteMatch::id`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteRule {
    pub pattern: &'static str,
    pub variants: &'static [(&'static [Role], ViewId)],
}

impl RouteRule {
    /// The view this rule mounts for `role`, if any.
    pub fn view_for(&self, role: Role) -> Option<ViewId> {
        self.variants
            .iter()
            .find(|(roles, _)| roles.contains(&role))
            .map(|(_, view)| *view)
    }

    /// Every role with a variant on this rule.
    pub fn roles(&self) -> impl Iterator<Item = Role> + '_ {
        self.variants.iter().flat_map(|(roles, _)| roles.iter().copied())
    }

    /// Match `path` against the pattern. `Some(None)` is a match without a
    /// parameter, `Some(Some(id))` a match capturing `id`.
    fn matches(&self, path: &str) -> Option<Option<String>> {
        let mut want = segments(self.pattern);
        let mut have = segments(path);
        let mut captured = None;
        loop {
            match (want.next(), have.next()) {
                (None, None) => return Some(captured),
                (Some(":id"), Some(seg)) => captured = Some(seg.to_string()),
                (Some(lit), Some(seg)) if lit == seg => {}
                _ => return None,
            }
        }
    }
}

const EVERYONE: &[Role] = &[SuperAdmin, SystemAdmin, CustomerSupport, FieldTechnician, It, Customer];
const TICKET_ROLES: &[Role] = &[SystemAdmin, CustomerSupport, FieldTechnician, It, Customer];

/// The route table. First matching pattern wins.
pub const ROUTES: &[RouteRule] = &[
    RouteRule {
        pattern: "/",
        variants: &[
            (&[SuperAdmin], ViewId::SuperAdminDashboard),
            (&[SystemAdmin], ViewId::SystemAdminDashboard),
            (&[CustomerSupport], ViewId::CustomerSupportDashboard),
            (&[FieldTechnician], ViewId::TechnicianMapView),
            (&[It], ViewId::ItOperationsDashboard),
            (&[Customer], ViewId::CustomerPortalDashboard),
        ],
    },
    RouteRule {
        pattern: "/tenants",
        variants: &[(&[SuperAdmin], ViewId::TenantManagement)],
    },
    RouteRule {
        pattern: "/customers",
        variants: &[
            (&[SystemAdmin], ViewId::CustomerManagement),
            (&[CustomerSupport], ViewId::CustomerLookup),
        ],
    },
    RouteRule {
        pattern: "/customers/:id",
        variants: &[(&[SystemAdmin, CustomerSupport], ViewId::CustomerProfile)],
    },
    RouteRule {
        pattern: "/tickets",
        variants: &[
            (&[SystemAdmin, CustomerSupport], ViewId::TicketQueue),
            (&[FieldTechnician], ViewId::AssignedJobs),
            (&[It], ViewId::IncidentTickets),
            (&[Customer], ViewId::MyTickets),
        ],
    },
    RouteRule {
        pattern: "/tickets/:id",
        variants: &[(TICKET_ROLES, ViewId::TicketDetail)],
    },
    RouteRule {
        pattern: "/map",
        variants: &[(&[FieldTechnician], ViewId::ServiceMap)],
    },
    RouteRule {
        pattern: "/devices",
        variants: &[
            (&[SystemAdmin, It], ViewId::DeviceInventory),
            (&[FieldTechnician], ViewId::FieldEquipment),
        ],
    },
    RouteRule {
        pattern: "/plans",
        variants: &[
            (&[SuperAdmin], ViewId::SubscriptionPlans),
            (&[SystemAdmin], ViewId::ServicePlans),
            (&[Customer], ViewId::AvailablePlans),
        ],
    },
    RouteRule {
        pattern: "/billing",
        variants: &[
            (&[SuperAdmin], ViewId::PlatformBilling),
            (&[SystemAdmin, CustomerSupport], ViewId::TenantBilling),
            (&[Customer], ViewId::MyBilling),
        ],
    },
    RouteRule {
        pattern: "/reports",
        variants: &[(&[SuperAdmin, SystemAdmin, It], ViewId::Reports)],
    },
    RouteRule {
        pattern: "/audit",
        variants: &[
            (&[SuperAdmin], ViewId::GlobalAuditLogs),
            (&[SystemAdmin], ViewId::TenantAuditLog),
        ],
    },
    RouteRule {
        pattern: "/global-settings",
        variants: &[(&[SuperAdmin], ViewId::GlobalSettings)],
    },
    RouteRule {
        pattern: "/settings",
        variants: &[(&[SystemAdmin, It], ViewId::TenantSettings)],
    },
    RouteRule {
        pattern: "/account-settings",
        variants: &[(EVERYONE, ViewId::AccountSettings)],
    },
];

/// Strip the query string, fragment and trailing slashes. The empty path
/// becomes `/`.
pub fn normalize_path(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let trimmed = path[..end].trim_end_matches('/');
    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}

/// Non-empty segments of the normalized path.
pub(crate) fn segments(path: &str) -> impl Iterator<Item = &str> {
    normalize_path(path).split('/').filter(|s| !s.is_empty())
}

/// Find the rule for `path` along with its captured `:id`.
pub fn find_rule(path: &str) -> Option<(&'static RouteRule, Option<String>)> {
    ROUTES
        .iter()
        .find_map(|rule| rule.matches(path).map(|id| (rule, id)))
}

/// Decide what `role` sees at `path`.
pub fn resolve(role: Role, path: &str) -> RouteOutcome {
    let normalized = normalize_path(path);
    let Some((rule, id)) = find_rule(normalized) else {
        tracing::debug!(path = normalized, "No route");
        return RouteOutcome::NotFound {
            path: normalized.to_string(),
        };
    };
    match rule.view_for(role) {
        Some(view) => RouteOutcome::View(RouteMatch { view, id }),
        None => {
            tracing::warn!(path = normalized, role = role.as_str(), "Route forbidden for role");
            RouteOutcome::Forbidden {
                path: normalized.to_string(),
                role,
            }
        }
    }
}

/// The dashboard variant mounted at `/` for `role`.
pub fn dashboard_for(role: Role) -> ViewId {
    match role {
        SuperAdmin => ViewId::SuperAdminDashboard,
        SystemAdmin => ViewId::SystemAdminDashboard,
        CustomerSupport => ViewId::CustomerSupportDashboard,
        FieldTechnician => ViewId::TechnicianMapView,
        It => ViewId::ItOperationsDashboard,
        Customer => ViewId::CustomerPortalDashboard,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::ALL_ROLES;

    fn view(role: Role, path: &str) -> Option<ViewId> {
        resolve(role, path).view()
    }

    #[test]
    fn normalize_strips_query_and_trailing_slash() {
        assert_eq!(normalize_path("/tickets/"), "/tickets");
        assert_eq!(normalize_path("/tickets?status=open"), "/tickets");
        assert_eq!(normalize_path("/audit#top"), "/audit");
        assert_eq!(normalize_path(""), "/");
        assert_eq!(normalize_path("///"), "/");
    }

    #[test]
    fn audit_route_variants() {
        assert_eq!(view(SuperAdmin, "/audit"), Some(ViewId::GlobalAuditLogs));
        assert_eq!(view(SystemAdmin, "/audit"), Some(ViewId::TenantAuditLog));
        assert_eq!(
            resolve(Customer, "/audit"),
            RouteOutcome::Forbidden {
                path: "/audit".into(),
                role: Customer,
            }
        );
    }

    #[test]
    fn root_dispatches_to_role_dashboard() {
        for role in ALL_ROLES {
            assert_eq!(view(*role, "/"), Some(dashboard_for(*role)));
        }
        assert_eq!(view(FieldTechnician, "/"), Some(ViewId::TechnicianMapView));
    }

    #[test]
    fn shared_routes_pick_role_variant() {
        assert_eq!(view(SystemAdmin, "/customers"), Some(ViewId::CustomerManagement));
        assert_eq!(view(CustomerSupport, "/customers"), Some(ViewId::CustomerLookup));
        assert_eq!(view(FieldTechnician, "/devices"), Some(ViewId::FieldEquipment));
        assert_eq!(view(It, "/devices"), Some(ViewId::DeviceInventory));
        assert_eq!(view(Customer, "/tickets"), Some(ViewId::MyTickets));
        assert_eq!(view(Customer, "/billing"), Some(ViewId::MyBilling));
    }

    #[test]
    fn id_segment_is_captured() {
        assert_eq!(
            resolve(FieldTechnician, "/tickets/TCK-1001"),
            RouteOutcome::View(RouteMatch {
                view: ViewId::TicketDetail,
                id: Some("TCK-1001".into()),
            })
        );
        assert!(resolve(Customer, "/customers/CUS-1").is_forbidden());
    }

    #[test]
    fn unknown_paths_are_not_found() {
        assert!(resolve(SuperAdmin, "/tickets-archive").is_not_found());
        assert!(resolve(SuperAdmin, "/tickets/1/comments").is_not_found());
        assert!(resolve(Customer, "/nowhere").is_not_found());
    }

    #[test]
    fn forbidden_and_not_found_are_distinct() {
        assert!(resolve(Customer, "/tenants").is_forbidden());
        assert!(!resolve(Customer, "/tenants").is_not_found());
    }

    #[test]
    fn patterns_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for rule in ROUTES {
            assert!(seen.insert(rule.pattern), "duplicate {}", rule.pattern);
        }
    }

    #[test]
    fn no_role_has_two_variants_on_one_rule() {
        for rule in ROUTES {
            let roles: Vec<_> = rule.roles().collect();
            let mut dedup = roles.clone();
            dedup.sort();
            dedup.dedup();
            assert_eq!(roles.len(), dedup.len(), "{}", rule.pattern);
        }
    }
}
