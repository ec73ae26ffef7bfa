use netdesk_core::prefs::{LANGUAGE_KEY, THEME_KEY};
use netdesk_core::{PreferenceStore, Translator};
use pretty_assertions::assert_eq;
use shared_types::{Language, ThemeMode};

use crate::common::{open_prefs, preference_dir};

#[test]
fn test_language_survives_restart() {
    let (_dir, path) = preference_dir();

    let mut prefs = open_prefs(&path);
    let mut translator = Translator::load(&prefs);
    assert_eq!(translator.language(), Language::English);
    translator.switch_language(&mut prefs, Language::Filipino).unwrap();
    drop(prefs);

    let reloaded = open_prefs(&path);
    assert_eq!(reloaded.language(), Language::Filipino);
    assert_eq!(Translator::load(&reloaded).translate("Tickets"), "Mga Tiket");
}

#[test]
fn test_theme_survives_restart() {
    let (_dir, path) = preference_dir();

    let mut prefs = open_prefs(&path);
    prefs.set_theme(ThemeMode::Dark).unwrap();
    drop(prefs);

    assert_eq!(open_prefs(&path).theme(), ThemeMode::Dark);
}

#[test]
fn test_file_holds_plain_keys() {
    let (_dir, path) = preference_dir();

    let mut prefs = open_prefs(&path);
    prefs.set_language(Language::Filipino).unwrap();
    prefs.set_theme(ThemeMode::Dark).unwrap();

    let store = prefs.into_store();
    assert_eq!(store.get(LANGUAGE_KEY).unwrap().as_deref(), Some("filipino"));
    assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("dark"));

    let raw = std::fs::read_to_string(&path).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json["language"], "filipino");
    assert_eq!(json["theme"], "dark");
}

#[test]
fn test_first_launch_uses_defaults() {
    let (_dir, path) = preference_dir();
    let prefs = open_prefs(&path);
    assert_eq!(prefs.language(), Language::English);
    assert_eq!(prefs.theme(), ThemeMode::Light);
    assert!(!path.exists());
}
