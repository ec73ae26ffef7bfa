use dioxus::prelude::*;
use netdesk_core::{PreferenceStore, Preferences, Translator};
use shared_types::{AppError, Language, ThemeMode};

/// Preferences over whichever store the platform provides.
pub type AppPreferences = Preferences<Box<dyn PreferenceStore>>;

/// Language and theme preferences plus the translator derived from them,
/// shared through context.
#[derive(Clone, Copy)]
pub struct PrefsState {
    prefs: Signal<AppPreferences>,
    translator: Signal<Translator>,
    /// Set once the user changes either preference.
    changed: Signal<bool>,
}

impl PrefsState {
    pub fn new(prefs: AppPreferences) -> Self {
        Self {
            translator: Signal::new(Translator::load(&prefs)),
            prefs: Signal::new(prefs),
            changed: Signal::new(false),
        }
    }

    pub fn translator(&self) -> Translator {
        (self.translator)()
    }

    pub fn language(&self) -> Language {
        self.translator.read().language()
    }

    pub fn theme(&self) -> ThemeMode {
        self.prefs.peek().theme()
    }

    /// Switch language for the whole app and persist it.
    pub fn set_language(&mut self, language: Language) -> Result<(), AppError> {
        self.changed.set(true);
        let mut translator = *self.translator.peek();
        let result = {
            let mut prefs = self.prefs.write();
            translator.switch_language(&mut *prefs, language)
        };
        self.translator.set(translator);
        result
    }

    pub fn set_theme(&mut self, theme: ThemeMode) -> Result<(), AppError> {
        tracing::info!(theme = theme.as_str(), "Theme switched");
        self.changed.set(true);
        self.prefs.write().set_theme(theme)
    }

    /// Swap in preferences read after startup. A user change made in the
    /// meantime wins; returns whether `prefs` was applied.
    #[cfg_attr(not(feature = "web"), allow(dead_code))]
    pub fn restore(&mut self, prefs: AppPreferences) -> bool {
        if *self.changed.peek() {
            return false;
        }
        self.translator.set(Translator::load(&prefs));
        self.prefs.set(prefs);
        true
    }
}

pub fn use_prefs() -> PrefsState {
    use_context::<PrefsState>()
}

/// The translator for the active language. Re-renders the caller on change.
pub fn use_translator() -> Translator {
    use_prefs().translator()
}
