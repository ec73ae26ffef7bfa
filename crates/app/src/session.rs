use dioxus::prelude::*;
use netdesk_core::Session;
use shared_types::Role;

/// The current demo session, shared through context.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionState {
    pub session: Signal<Session>,
}

impl SessionState {
    pub fn new(session: Session) -> Self {
        Self {
            session: Signal::new(session),
        }
    }

    pub fn role(&self) -> Role {
        self.session.read().role()
    }

    pub fn set_role(&mut self, role: Role) {
        self.session.write().set_role(role);
    }

    pub fn logout(&mut self) {
        self.session.write().logout();
    }
}

/// Hook to access the session.
pub fn use_session() -> SessionState {
    use_context::<SessionState>()
}

/// The current role. Re-renders the caller when it changes.
pub fn use_role() -> Role {
    use_session().role()
}
