use netdesk_core::{navigation_for, Session};
use shared_types::{Role, ALL_ROLES};

#[test]
fn test_set_role_is_read_back() {
    let mut session = Session::new(Role::SystemAdmin);
    for role in ALL_ROLES {
        session.set_role(*role);
        assert_eq!(session.role(), *role);
    }
}

#[test]
fn test_restart_returns_to_default_role() {
    let default_role = Role::SystemAdmin;
    let mut session = Session::new(default_role);
    session.set_role(Role::FieldTechnician);
    assert_eq!(session.role(), Role::FieldTechnician);

    let restarted = Session::new(default_role);
    assert_eq!(restarted.role(), default_role);
}

#[test]
fn test_logout_restores_default_navigation() {
    let mut session = Session::new(Role::CustomerSupport);
    let before = navigation_for(session.role());
    session.set_role(Role::SuperAdmin);
    assert_ne!(navigation_for(session.role()), before);
    session.logout();
    assert_eq!(navigation_for(session.role()), before);
}
