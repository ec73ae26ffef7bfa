use dioxus::prelude::*;

/// `data-theme` value on `<html>` for the given mode.
pub fn theme_attribute(is_dark: bool) -> &'static str {
    if is_dark {
        "dark"
    } else {
        "light"
    }
}

/// Dark/light flag shared through context.
///
/// The sidebar switch and the account settings page both write it;
/// [`ThemeSeed`] keeps the document in sync.
#[derive(Clone, Copy)]
pub struct ThemeState {
    pub is_dark: Signal<bool>,
}

impl ThemeState {
    pub fn new(is_dark: bool) -> Self {
        Self {
            is_dark: Signal::new(is_dark),
        }
    }
}

/// Applies the current [`ThemeState`] to the document root and re-applies
/// it whenever the flag changes. Mount once, below the context provider.
#[component]
pub fn ThemeSeed() -> Element {
    let theme = use_context::<ThemeState>();
    use_effect(move || apply_theme((theme.is_dark)()));

    rsx! {}
}

/// Set `data-theme` on `<html>`.
pub fn apply_theme(is_dark: bool) {
    let theme = theme_attribute(is_dark);
    document::eval(&format!(
        "document.documentElement.setAttribute('data-theme', '{theme}');"
    ));
}
