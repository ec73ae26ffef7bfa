use netdesk_core::navigation::active_entry;
use netdesk_core::router::find_rule;
use netdesk_core::{is_active, navigation_for, resolve, NAVIGATION, ROUTES};
use shared_types::{Role, ALL_ROLES};

#[test]
fn test_visible_entries_never_lead_to_forbidden_pages() {
    for role in ALL_ROLES {
        for entry in navigation_for(*role) {
            let outcome = resolve(*role, entry.path);
            assert!(
                outcome.view().is_some(),
                "{role} sees {} but gets {outcome:?}",
                entry.path
            );
        }
    }
}

#[test]
fn test_hidden_entries_are_forbidden() {
    for role in ALL_ROLES {
        for entry in NAVIGATION.iter().filter(|e| !e.allows(*role)) {
            assert!(
                resolve(*role, entry.path).is_forbidden(),
                "{role} is hidden from {} but may open it",
                entry.path
            );
        }
    }
}

#[test]
fn test_every_navigation_path_has_a_rule() {
    for entry in NAVIGATION {
        let (rule, id) = find_rule(entry.path).unwrap();
        assert_eq!(rule.pattern, entry.path);
        assert!(id.is_none());
    }
}

#[test]
fn test_every_literal_rule_is_in_navigation() {
    for rule in ROUTES.iter().filter(|r| !r.pattern.contains(':')) {
        assert!(
            NAVIGATION.iter().any(|e| e.path == rule.pattern),
            "{} has no sidebar entry",
            rule.pattern
        );
    }
}

#[test]
fn test_active_link_on_detail_page() {
    assert!(is_active("/", "/"));
    assert!(is_active("/tickets", "/tickets/123"));
    assert!(!is_active("/", "/tickets"));
    assert!(!is_active("/tickets", "/tickets-archive"));

    let entry = active_entry(Role::CustomerSupport, "/customers/CUS-2002").unwrap();
    assert_eq!(entry.path, "/customers");
}
