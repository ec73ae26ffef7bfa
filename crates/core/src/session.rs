use shared_types::Role;

/// The demo session: which role the dashboard is currently rendered for.
///
/// One `Session` is owned by the app shell and handed to components through
/// context; nothing here is process-global. The role is never
/// persisted, so every new session starts at `default_role`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    role: Role,
    default_role: Role,
}

impl Session {
    pub fn new(default_role: Role) -> Self {
        Self {
            role: default_role,
            default_role,
        }
    }

    /// Current role. Never fails.
    pub fn role(&self) -> Role {
        self.role
    }

    /// Label of the current role, e.g. "Field Technician".
    pub fn display_name(&self) -> &'static str {
        self.role.label()
    }

    pub fn default_role(&self) -> Role {
        self.default_role
    }

    /// Switch to any role. There are no transition restrictions.
    pub fn set_role(&mut self, role: Role) {
        if role != self.role {
            tracing::info!(from = self.role.as_str(), to = role.as_str(), "Role switched");
        }
        self.role = role;
    }

    /// Return to the default role. Language and theme are left untouched.
    pub fn logout(&mut self) {
        tracing::info!(role = self.role.as_str(), "Session logged out");
        self.role = self.default_role;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Role::default())
    }
}
