use netdesk_core::config::parse_config;
use pretty_assertions::assert_eq;
use shared_types::{AppConfig, AppErrorKind, FeatureFlags, Language, Role};

const PROJECT_CONFIG: &str = include_str!("../../../config.toml");

#[test]
fn test_project_config_parses() {
    let config = parse_config(PROJECT_CONFIG).unwrap();
    assert_eq!(
        config.features,
        FeatureFlags {
            role_switcher: true,
            language_picker: true,
        }
    );
    assert_eq!(config.session.default_role, Role::SystemAdmin);
    assert_eq!(config.i18n.default_language, Language::English);
    assert_eq!(config.storage.path, None);
}

#[test]
fn test_empty_config_is_all_defaults() {
    let config = parse_config("").unwrap();
    assert_eq!(config, AppConfig::default());
    assert!(!config.features.role_switcher);
    assert_eq!(config.session.default_role, Role::SystemAdmin);
}

#[test]
fn test_unknown_role_is_config_error() {
    let err = parse_config("[session]\ndefault_role = \"janitor\"").unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Config);
}

#[test]
fn test_storage_path_override() {
    let config = parse_config("[storage]\npath = \"/tmp/netdesk/prefs.json\"").unwrap();
    assert_eq!(
        config.storage.path.as_deref(),
        Some(std::path::Path::new("/tmp/netdesk/prefs.json"))
    );
}

const CORE_MANIFEST: &str = include_str!("../../core/Cargo.toml");

#[test]
fn test_core_serializes_through_serde_json_only() {
    let keys: Vec<&str> = CORE_MANIFEST
        .lines()
        .filter_map(|line| line.split_once(" = ").map(|(key, _)| key.trim()))
        .collect();
    assert!(keys.contains(&"serde_json"));
    assert!(!keys.contains(&"serde"));
}
