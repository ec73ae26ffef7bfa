use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::{Language, Role};

/// Feature flags controlling optional shell behavior.
///
/// Every field defaults to `false` so that a missing or incomplete config
/// file disables all optional features.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq)]
pub struct FeatureFlags {
    /// Show the demo role switcher in the navbar.
    #[serde(default)]
    pub role_switcher: bool,
    /// Show the language picker in the top bar.
    #[serde(default)]
    pub language_picker: bool,
}

/// `[session]` section.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SessionConfig {
    /// Role a fresh session starts in and `logout` returns to.
    #[serde(default)]
    pub default_role: Role,
}

/// `[i18n]` section.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct I18nConfig {
    /// Language used until the user picks one.
    #[serde(default)]
    pub default_language: Language,
}

/// `[storage]` section.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct StorageConfig {
    /// Preference file location. `None` uses the platform config directory.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub features: FeatureFlags,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub i18n: I18nConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_flags_all_false() {
        let flags = FeatureFlags::default();
        assert!(!flags.role_switcher);
        assert!(!flags.language_picker);
    }

    #[test]
    fn deserialize_empty_toml_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.session.default_role, Role::SystemAdmin);
        assert_eq!(config.i18n.default_language, Language::English);
        assert!(config.storage.path.is_none());
    }

    #[test]
    fn deserialize_partial_toml_defaults_missing_fields() {
        let config: AppConfig = toml::from_str(
            r#"
            [features]
            role_switcher = true
            "#,
        )
        .unwrap();
        assert!(config.features.role_switcher);
        assert!(!config.features.language_picker);
        assert_eq!(config.session, SessionConfig::default());
    }

    #[test]
    fn deserialize_full_toml() {
        let config: AppConfig = toml::from_str(
            r#"
            [features]
            role_switcher = true
            language_picker = true

            [session]
            default_role = "customer_support"

            [i18n]
            default_language = "filipino"

            [storage]
            path = "/tmp/netdesk/prefs.json"
            "#,
        )
        .unwrap();
        assert!(config.features.language_picker);
        assert_eq!(config.session.default_role, Role::CustomerSupport);
        assert_eq!(config.i18n.default_language, Language::Filipino);
        assert_eq!(
            config.storage.path,
            Some(PathBuf::from("/tmp/netdesk/prefs.json"))
        );
    }

    #[test]
    fn unknown_role_is_rejected() {
        let result: Result<AppConfig, _> = toml::from_str(
            r#"
            [session]
            default_role = "janitor"
            "#,
        );
        assert!(result.is_err());
    }
}
