//! Picks the preference store for the current platform.
//!
//! Native builds keep preferences in a JSON file under the user config
//! directory. The web build mirrors `localStorage` in memory: values are read
//! once after launch and every write goes to both.

#[cfg(feature = "web")]
use dioxus::prelude::*;
use netdesk_core::prefs::{LANGUAGE_KEY, THEME_KEY};
use netdesk_core::{MemoryStore, PreferenceStore};
use serde::Deserialize;
use shared_types::{AppConfig, AppError};

#[cfg(not(feature = "web"))]
pub fn open_store(config: &AppConfig) -> Box<dyn PreferenceStore> {
    use netdesk_core::FileStore;

    match config.storage.path.clone().or_else(FileStore::default_path) {
        Some(path) => {
            tracing::info!(path = %path.display(), "Using preference file");
            Box::new(FileStore::open(path))
        }
        None => {
            tracing::warn!("No config directory; preferences last until exit");
            Box::new(MemoryStore::new())
        }
    }
}

#[cfg(feature = "web")]
pub fn open_store(_config: &AppConfig) -> Box<dyn PreferenceStore> {
    Box::new(BrowserStore::default())
}

/// Stored values as returned by [`READ_SCRIPT`].
#[derive(Debug, Default, Deserialize)]
#[cfg_attr(not(feature = "web"), allow(dead_code))]
struct StoredPrefs {
    language: Option<String>,
    theme: Option<String>,
}

#[cfg_attr(not(feature = "web"), allow(dead_code))]
impl StoredPrefs {
    fn into_snapshot(self) -> MemoryStore {
        let entries = [(LANGUAGE_KEY, self.language), (THEME_KEY, self.theme)];
        MemoryStore::with_values(
            entries
                .into_iter()
                .filter_map(|(key, value)| value.map(|v| (key, v))),
        )
    }
}

#[cfg_attr(not(feature = "web"), allow(dead_code))]
const READ_SCRIPT: &str =
    "return { language: localStorage.getItem('language'), theme: localStorage.getItem('theme') };";

/// JavaScript that writes one key to `localStorage`.
#[cfg_attr(not(feature = "web"), allow(dead_code))]
fn set_item_script(key: &str, value: &str) -> Result<String, AppError> {
    Ok(format!(
        "localStorage.setItem({}, {});",
        serde_json::to_string(key)?,
        serde_json::to_string(value)?
    ))
}

/// `localStorage` seen through an in-memory snapshot.
#[cfg(feature = "web")]
#[derive(Debug, Default)]
pub struct BrowserStore {
    snapshot: MemoryStore,
}

#[cfg(feature = "web")]
impl PreferenceStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        self.snapshot.get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), AppError> {
        self.snapshot.set(key, value)?;
        document::eval(&set_item_script(key, value)?);
        Ok(())
    }
}

/// Read `localStorage` once after launch and apply what it holds.
#[cfg(feature = "web")]
pub fn use_restore_browser_prefs(default_language: shared_types::Language) {
    use crate::i18n::{use_prefs, AppPreferences};
    use netdesk_core::Preferences;
    use shared_ui::theme::ThemeState;

    let mut prefs = use_prefs();
    let mut theme = use_context::<ThemeState>();

    use_hook(move || {
        spawn(async move {
            match document::eval(READ_SCRIPT).join::<StoredPrefs>().await {
                Ok(stored) => {
                    let store = BrowserStore {
                        snapshot: stored.into_snapshot(),
                    };
                    let loaded: AppPreferences = Preferences::load(Box::new(store), default_language);
                    let dark = loaded.theme().is_dark();
                    if prefs.restore(loaded) {
                        theme.is_dark.set(dark);
                        tracing::debug!("Restored browser preferences");
                    } else {
                        tracing::debug!("Preferences changed before browser storage was read; keeping them");
                    }
                }
                Err(e) => tracing::warn!(error = %e, "Cannot read browser storage"),
            }
        });
    });
}
