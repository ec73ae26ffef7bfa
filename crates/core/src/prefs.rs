use shared_types::{AppError, Language, ThemeMode};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Storage key of the language preference.
pub const LANGUAGE_KEY: &str = "language";
/// Storage key of the theme preference.
pub const THEME_KEY: &str = "theme";

#[cfg(not(target_arch = "wasm32"))]
const APP_DIR_NAME: &str = "netdesk";
#[cfg(not(target_arch = "wasm32"))]
const PREFERENCES_FILE_NAME: &str = "preferences.json";

// ── Trait ────────────────────────────────────────────────────────────

/// Durable string key/value storage for client preferences.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), AppError>;
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), AppError> {
        (**self).set(key, value)
    }
}

// ── File implementation ─────────────────────────────────────────────

/// Preferences kept in a JSON object file.
///
/// The file is read once on open and rewritten on every `set`.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store at `path`.
    ///
    /// A missing file is an empty store. A file that cannot be read or
    /// parsed is also treated as empty and is replaced on the next write.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(values) => values,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Ignoring corrupt preference file");
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Cannot read preference file");
                BTreeMap::new()
            }
        };
        Self { path, values }
    }

    /// Platform config location, e.g. `~/.config/netdesk/preferences.json`.
    ///
    /// Returns `None` if the config directory cannot be determined.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(PREFERENCES_FILE_NAME))
    }

    #[cfg(target_arch = "wasm32")]
    pub fn default_path() -> Option<PathBuf> {
        None
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(&self.values)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), AppError> {
        self.values.insert(key.to_string(), value.to_string());
        self.flush()
    }
}

// ── In-memory implementation ────────────────────────────────────────

/// Volatile store, used in tests and as the browser storage snapshot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryStore {
    values: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_values<I, K, V>(values: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: values
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), AppError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// ── Typed preferences ───────────────────────────────────────────────

/// Language and theme, read once from a store and written through on change.
#[derive(Debug)]
pub struct Preferences<S: PreferenceStore> {
    store: S,
    language: Language,
    theme: ThemeMode,
}

impl<S: PreferenceStore> Preferences<S> {
    /// Read both preferences. Missing, unreadable or unknown values fall
    /// back to `default_language` and [`ThemeMode::default`].
    pub fn load(store: S, default_language: Language) -> Self {
        let language = read_parsed(&store, LANGUAGE_KEY, Language::parse).unwrap_or(default_language);
        let theme = read_parsed(&store, THEME_KEY, ThemeMode::parse).unwrap_or_default();
        Self {
            store,
            language,
            theme,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    /// Update the language and persist it. The in-memory value changes even
    /// when the write fails.
    pub fn set_language(&mut self, language: Language) -> Result<(), AppError> {
        self.language = language;
        self.store.set(LANGUAGE_KEY, language.as_str())
    }

    /// Update the theme and persist it. The in-memory value changes even
    /// when the write fails.
    pub fn set_theme(&mut self, theme: ThemeMode) -> Result<(), AppError> {
        self.theme = theme;
        self.store.set(THEME_KEY, theme.as_str())
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

fn read_parsed<S, T>(store: &S, key: &str, parse: fn(&str) -> Option<T>) -> Option<T>
where
    S: PreferenceStore,
{
    match store.get(key) {
        Ok(Some(raw)) => {
            let parsed = parse(&raw);
            if parsed.is_none() {
                tracing::warn!(key, value = %raw, "Unknown preference value, using default");
            }
            parsed
        }
        Ok(None) => None,
        Err(e) => {
            tracing::warn!(key, error = %e, "Failed to read preference");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_store_uses_defaults() {
        let prefs = Preferences::load(MemoryStore::new(), Language::English);
        assert_eq!(prefs.language(), Language::English);
        assert_eq!(prefs.theme(), ThemeMode::Light);

        let prefs = Preferences::load(MemoryStore::new(), Language::Filipino);
        assert_eq!(prefs.language(), Language::Filipino);
    }

    #[test]
    fn unknown_values_fall_back() {
        let store = MemoryStore::with_values([("language", "latin"), ("theme", "neon")]);
        let prefs = Preferences::load(store, Language::English);
        assert_eq!(prefs.language(), Language::English);
        assert_eq!(prefs.theme(), ThemeMode::Light);
    }

    #[test]
    fn setters_write_through() {
        let mut prefs = Preferences::load(MemoryStore::new(), Language::English);
        prefs.set_language(Language::Filipino).unwrap();
        prefs.set_theme(ThemeMode::Dark).unwrap();
        let store = prefs.into_store();
        assert_eq!(store.get("language").unwrap().as_deref(), Some("filipino"));
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn file_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("preferences.json");

        let mut prefs = Preferences::load(FileStore::open(&path), Language::English);
        prefs.set_language(Language::Filipino).unwrap();
        prefs.set_theme(ThemeMode::Dark).unwrap();
        drop(prefs);

        let reopened = Preferences::load(FileStore::open(&path), Language::English);
        assert_eq!(reopened.language(), Language::Filipino);
        assert_eq!(reopened.theme(), ThemeMode::Dark);
    }

    #[test]
    fn missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path().join("absent.json"));
        assert_eq!(store.get("language").unwrap(), None);
    }

    #[test]
    fn corrupt_file_is_empty_and_replaced() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        fs::write(&path, "{not json").unwrap();

        let mut store = FileStore::open(&path);
        assert_eq!(store.get("theme").unwrap(), None);
        store.set("theme", "dark").unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let parsed: BTreeMap<String, String> = serde_json::from_str(&contents).unwrap();
        assert_eq!(parsed.get("theme").map(String::as_str), Some("dark"));
    }

    #[test]
    fn write_failure_is_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        // A directory where the file should be makes the write fail.
        let path = dir.path().join("taken");
        fs::create_dir(&path).unwrap();

        let mut prefs = Preferences::load(FileStore::open(&path), Language::English);
        let err = prefs.set_theme(ThemeMode::Dark).unwrap_err();
        assert_eq!(err.kind, shared_types::AppErrorKind::Storage);
        assert_eq!(prefs.theme(), ThemeMode::Dark);
    }

    #[test]
    fn boxed_store_is_a_store() {
        let boxed: Box<dyn PreferenceStore> = Box::new(MemoryStore::new());
        let mut prefs = Preferences::load(boxed, Language::English);
        prefs.set_language(Language::Filipino).unwrap();
        assert_eq!(
            prefs.store().get("language").unwrap().as_deref(),
            Some("filipino")
        );
    }
}
