use shared_types::{NavIcon, Role};

use crate::router::segments;

/// One sidebar link, tagged with the roles allowed to see it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationEntry {
    /// Translation key of the link label.
    pub label_key: &'static str,
    pub path: &'static str,
    pub icon: NavIcon,
    pub allowed_roles: &'static [Role],
}

impl NavigationEntry {
    pub fn allows(&self, role: Role) -> bool {
        self.allowed_roles.contains(&role)
    }
}

use Role::*;

const EVERYONE: &[Role] = &[SuperAdmin, SystemAdmin, CustomerSupport, FieldTechnician, It, Customer];

/// Master navigation table, in sidebar order.
pub const NAVIGATION: &[NavigationEntry] = &[
    NavigationEntry {
        label_key: "Dashboard",
        path: "/",
        icon: NavIcon::Dashboard,
        allowed_roles: EVERYONE,
    },
    NavigationEntry {
        label_key: "Tenants",
        path: "/tenants",
        icon: NavIcon::Tenants,
        allowed_roles: &[SuperAdmin],
    },
    NavigationEntry {
        label_key: "Customers",
        path: "/customers",
        icon: NavIcon::Customers,
        allowed_roles: &[SystemAdmin, CustomerSupport],
    },
    NavigationEntry {
        label_key: "Tickets",
        path: "/tickets",
        icon: NavIcon::Tickets,
        allowed_roles: &[SystemAdmin, CustomerSupport, FieldTechnician, It, Customer],
    },
    NavigationEntry {
        label_key: "Service Map",
        path: "/map",
        icon: NavIcon::Map,
        allowed_roles: &[FieldTechnician],
    },
    NavigationEntry {
        label_key: "Devices",
        path: "/devices",
        icon: NavIcon::Devices,
        allowed_roles: &[SystemAdmin, FieldTechnician, It],
    },
    NavigationEntry {
        label_key: "Plans",
        path: "/plans",
        icon: NavIcon::Plans,
        allowed_roles: &[SuperAdmin, SystemAdmin, Customer],
    },
    NavigationEntry {
        label_key: "Billing",
        path: "/billing",
        icon: NavIcon::Billing,
        allowed_roles: &[SuperAdmin, SystemAdmin, CustomerSupport, Customer],
    },
    NavigationEntry {
        label_key: "Reports",
        path: "/reports",
        icon: NavIcon::Reports,
        allowed_roles: &[SuperAdmin, SystemAdmin, It],
    },
    NavigationEntry {
        label_key: "Audit Logs",
        path: "/audit",
        icon: NavIcon::Audit,
        allowed_roles: &[SuperAdmin, SystemAdmin],
    },
    NavigationEntry {
        label_key: "Global Settings",
        path: "/global-settings",
        icon: NavIcon::GlobalSettings,
        allowed_roles: &[SuperAdmin],
    },
    NavigationEntry {
        label_key: "Settings",
        path: "/settings",
        icon: NavIcon::Settings,
        allowed_roles: &[SystemAdmin, It],
    },
    NavigationEntry {
        label_key: "Account Settings",
        path: "/account-settings",
        icon: NavIcon::Account,
        allowed_roles: EVERYONE,
    },
];

/// Entries visible to `role`, in table order.
pub fn navigation_for(role: Role) -> Vec<&'static NavigationEntry> {
    NAVIGATION.iter().filter(|e| e.allows(role)).collect()
}

/// Whether the link to `path` should be highlighted while `current_path`
/// is displayed.
///
/// Paths are compared segment by segment, the same way the router matches
/// them. The root only matches itself. Other paths match themselves and
/// anything below them, so `/tickets` is active for `/tickets/123` but not
/// for `/tickets-archive`.
pub fn is_active(path: &str, current_path: &str) -> bool {
    let want: Vec<&str> = segments(path).collect();
    let mut have = segments(current_path);
    if want.is_empty() {
        return have.next().is_none();
    }
    want.into_iter().all(|seg| have.next() == Some(seg))
}

/// The visible entry that best matches `current_path` (longest path wins).
pub fn active_entry(role: Role, current_path: &str) -> Option<&'static NavigationEntry> {
    navigation_for(role)
        .into_iter()
        .filter(|e| is_active(e.path, current_path))
        .max_by_key(|e| e.path.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::ALL_ROLES;

    fn paths(role: Role) -> Vec<&'static str> {
        navigation_for(role).iter().map(|e| e.path).collect()
    }

    #[test]
    fn filter_keeps_only_allowed_entries_in_order() {
        for role in ALL_ROLES {
            let visible = navigation_for(*role);
            assert!(visible.iter().all(|e| e.allowed_roles.contains(role)));

            let expected: Vec<_> = NAVIGATION.iter().filter(|e| e.allows(*role)).collect();
            assert_eq!(visible, expected);
        }
    }

    #[test]
    fn field_technician_sees_no_super_admin_only_entry() {
        let visible = navigation_for(FieldTechnician);
        for entry in NAVIGATION.iter().filter(|e| e.allowed_roles == [SuperAdmin]) {
            assert!(!visible.contains(&entry), "leaked {}", entry.path);
        }
        assert_eq!(
            paths(FieldTechnician),
            vec!["/", "/tickets", "/map", "/devices", "/account-settings"]
        );
    }

    #[test]
    fn customer_navigation() {
        assert_eq!(
            paths(Customer),
            vec!["/", "/tickets", "/plans", "/billing", "/account-settings"]
        );
    }

    #[test]
    fn every_role_has_dashboard_and_account_settings() {
        for role in ALL_ROLES {
            let visible = paths(*role);
            assert_eq!(visible.first(), Some(&"/"));
            assert_eq!(visible.last(), Some(&"/account-settings"));
        }
    }

    #[test]
    fn paths_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for entry in NAVIGATION {
            assert!(seen.insert(entry.path), "duplicate {}", entry.path);
        }
    }

    #[test]
    fn root_is_active_only_on_root() {
        assert!(is_active("/", "/"));
        assert!(!is_active("/", "/tickets"));
        assert!(is_active("/", "/?tab=overview"));
    }

    #[test]
    fn nested_paths_are_active() {
        assert!(is_active("/tickets", "/tickets"));
        assert!(is_active("/tickets", "/tickets/123"));
        assert!(is_active("/tickets", "/tickets/"));
        assert!(is_active("/tickets", "/tickets?status=open"));
    }

    #[test]
    fn sibling_with_shared_prefix_is_not_active() {
        assert!(!is_active("/tickets", "/tickets-archive"));
        assert!(!is_active("/settings", "/settings-old/x"));
        assert!(!is_active("/tickets/123", "/tickets"));
    }

    #[test]
    fn empty_segments_match_like_the_router() {
        let outcome = crate::router::resolve(SystemAdmin, "//tickets//TCK-1");
        assert_eq!(
            outcome.view(),
            Some(shared_types::ViewId::TicketDetail)
        );
        assert!(is_active("/tickets", "//tickets//TCK-1"));
        assert!(is_active("/", "//"));
        assert!(!is_active("/", "//tickets"));
        assert_eq!(
            active_entry(SystemAdmin, "//tickets//TCK-1").map(|e| e.label_key),
            Some("Tickets")
        );
    }

    #[test]
    fn active_entry_prefers_longest_match() {
        let entry = active_entry(SystemAdmin, "/tickets/TCK-1001").unwrap();
        assert_eq!(entry.label_key, "Tickets");
        assert_eq!(active_entry(SystemAdmin, "/").unwrap().label_key, "Dashboard");
        assert!(active_entry(Customer, "/audit").is_none());
    }
}
