use netdesk_core::i18n::{lookup, CATALOG};
use netdesk_core::{Translator, NAVIGATION};
use shared_types::{Language, ALL_LANGUAGES, ALL_ROLES};

use crate::common::ALL_VIEWS;

#[test]
fn test_catalog_values_for_both_languages() {
    let english = Translator::new(Language::English);
    let filipino = Translator::new(Language::Filipino);
    for (key, en, fil) in CATALOG {
        assert_eq!(english.translate(key), *en);
        assert_eq!(filipino.translate(key), *fil);
    }
}

#[test]
fn test_absent_key_is_returned_for_every_language() {
    for lang in ALL_LANGUAGES {
        let t = Translator::new(*lang);
        assert_eq!(t.translate("Nonexistent Key 42"), "Nonexistent Key 42");
        assert_eq!(t.translate(""), "");
    }
}

#[test]
fn test_shell_labels_are_catalogued() {
    let labels = NAVIGATION
        .iter()
        .map(|e| e.label_key)
        .chain(ALL_VIEWS.iter().map(|v| v.title_key()))
        .chain(ALL_ROLES.iter().map(|r| r.label()));
    for label in labels {
        for lang in ALL_LANGUAGES {
            assert!(lookup(label, *lang).is_some(), "{label} missing for {lang:?}");
        }
    }
}

#[test]
fn test_filipino_greeting_interpolates_role() {
    let t = Translator::new(Language::Filipino);
    let role = t.translate("Field Technician");
    let greeting = t.translate_with("Welcome back, {name}", &[("name", role)]);
    assert!(greeting.contains(role));
    assert!(!greeting.contains("{name}"));
}
