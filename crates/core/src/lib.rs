//! Role-scoped view composition for the NetDesk dashboard.
//!
//! Everything here is UI-framework agnostic: the app crate wraps these
//! types in reactive signals and renders what they decide.

pub mod config;
pub mod i18n;
pub mod navigation;
pub mod prefs;
pub mod router;
pub mod session;

pub use i18n::Translator;
pub use navigation::{is_active, navigation_for, NavigationEntry, NAVIGATION};
pub use prefs::{FileStore, MemoryStore, PreferenceStore, Preferences};
pub use router::{resolve, RouteRule, ROUTES};
pub use session::Session;
