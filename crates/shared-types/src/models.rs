use serde::{Deserialize, Serialize};
use std::fmt;

/// The permission class of the current dashboard user.
///
/// Drives which navigation entries, dashboard variant and page components
/// are reachable. Serialized as its snake_case key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    SuperAdmin,
    #[default]
    SystemAdmin,
    CustomerSupport,
    FieldTechnician,
    It,
    Customer,
}

/// All roles in display order.
pub const ALL_ROLES: &[Role] = &[
    Role::SuperAdmin,
    Role::SystemAdmin,
    Role::CustomerSupport,
    Role::FieldTechnician,
    Role::It,
    Role::Customer,
];

impl Role {
    /// Lowercase key used in config files and select values.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "super_admin",
            Role::SystemAdmin => "system_admin",
            Role::CustomerSupport => "customer_support",
            Role::FieldTechnician => "field_technician",
            Role::It => "it",
            Role::Customer => "customer",
        }
    }

    /// Human-readable name, also the translation key for the role.
    pub fn label(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "Super Admin",
            Role::SystemAdmin => "System Admin",
            Role::CustomerSupport => "Customer Support",
            Role::FieldTechnician => "Field Technician",
            Role::It => "IT",
            Role::Customer => "Customer",
        }
    }

    /// Parse a role key or label. Case, spaces, dashes and underscores are
    /// not significant, so `"Super Admin"`, `"super-admin"` and
    /// `"super_admin"` all parse.
    pub fn parse(s: &str) -> Option<Self> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();
        match normalized.as_str() {
            "superadmin" => Some(Role::SuperAdmin),
            "systemadmin" | "admin" => Some(Role::SystemAdmin),
            "customersupport" | "support" => Some(Role::CustomerSupport),
            "fieldtechnician" | "technician" | "fieldtech" => Some(Role::FieldTechnician),
            "it" | "itoperations" => Some(Role::It),
            "customer" => Some(Role::Customer),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// UI languages with a translation catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    #[default]
    English,
    Filipino,
}

pub const ALL_LANGUAGES: &[Language] = &[Language::English, Language::Filipino];

impl Language {
    /// Value written to durable storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Filipino => "filipino",
        }
    }

    /// Name shown in the language picker, in the language itself.
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Filipino => "Filipino",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "english" | "en" => Some(Language::English),
            "filipino" | "fil" | "tl" | "tagalog" => Some(Language::Filipino),
            _ => None,
        }
    }
}

/// Dark/light display mode, persisted as `"dark"` or `"light"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ThemeMode {
    Dark,
    #[default]
    Light,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "dark" => Some(ThemeMode::Dark),
            "light" => Some(ThemeMode::Light),
            _ => None,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ThemeMode::Dark)
    }

    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }
}
