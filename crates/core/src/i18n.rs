//! English/Filipino string table with pass-through fallback.
//!
//! Keys are the English UI text. A key missing from the catalog is returned
//! unchanged, so an untranslated string is never blank and lookup never
//! panics.

use shared_types::{AppError, Language};
use std::collections::HashMap;
use std::sync::OnceLock;

use crate::prefs::{PreferenceStore, Preferences};

/// `(key, English, Filipino)`.
pub const CATALOG: &[(&str, &str, &str)] = &[
    // Navigation and page titles
    ("Dashboard", "Dashboard", "Dashboard"),
    ("Tenants", "Tenants", "Mga Tenant"),
    ("Customers", "Customers", "Mga Customer"),
    ("Tickets", "Tickets", "Mga Tiket"),
    ("Service Map", "Service Map", "Mapa ng Serbisyo"),
    ("Devices", "Devices", "Mga Device"),
    ("Plans", "Plans", "Mga Plano"),
    ("Billing", "Billing", "Pagsingil"),
    ("Reports", "Reports", "Mga Ulat"),
    ("Audit Logs", "Audit Logs", "Mga Audit Log"),
    ("Global Settings", "Global Settings", "Pangkalahatang Setting"),
    ("Settings", "Settings", "Mga Setting"),
    ("Account Settings", "Account Settings", "Setting ng Account"),
    ("Customer Profile", "Customer Profile", "Profile ng Customer"),
    ("Assigned Jobs", "Assigned Jobs", "Mga Nakatalagang Trabaho"),
    ("My Tickets", "My Tickets", "Aking mga Tiket"),
    ("Ticket Details", "Ticket Details", "Detalye ng Tiket"),
    ("Field Equipment", "Field Equipment", "Kagamitan sa Field"),
    ("My Bills", "My Bills", "Aking mga Bayarin"),
    // Roles
    ("Super Admin", "Super Admin", "Super Admin"),
    ("System Admin", "System Admin", "System Admin"),
    ("Customer Support", "Customer Support", "Suporta sa Customer"),
    ("Field Technician", "Field Technician", "Field Technician"),
    ("IT", "IT", "IT"),
    ("Customer", "Customer", "Customer"),
    // Shell
    ("Logout", "Logout", "Mag-logout"),
    ("Language", "Language", "Wika"),
    ("Dark Mode", "Dark Mode", "Madilim na Mode"),
    ("Role", "Role", "Tungkulin"),
    ("Signed in as {role}", "Signed in as {role}", "Naka-sign in bilang {role}"),
    ("Could not save preference", "Could not save preference", "Hindi ma-save ang setting"),
    // Dashboards
    ("Welcome back, {name}", "Welcome back, {name}", "Maligayang pagbabalik, {name}"),
    ("Open Tickets", "Open Tickets", "Bukas na mga Tiket"),
    ("Active Subscribers", "Active Subscribers", "Aktibong Subscriber"),
    ("Monthly Revenue", "Monthly Revenue", "Buwanang Kita"),
    ("Network Uptime", "Network Uptime", "Uptime ng Network"),
    ("Active Tenants", "Active Tenants", "Aktibong Tenant"),
    ("Jobs Today", "Jobs Today", "Mga Trabaho Ngayon"),
    ("Devices Offline", "Devices Offline", "Mga Device na Offline"),
    ("Next Payment Due", "Next Payment Due", "Susunod na Bayarin"),
    ("Current Plan", "Current Plan", "Kasalukuyang Plano"),
    // Error pages
    ("Access Denied", "Access Denied", "Walang Pahintulot"),
    (
        "Your role ({role}) cannot open {path}.",
        "Your role ({role}) cannot open {path}.",
        "Hindi mabubuksan ng iyong tungkulin ({role}) ang {path}.",
    ),
    ("Page Not Found", "Page Not Found", "Hindi Nahanap ang Pahina"),
    ("The page {path} could not be found.", "The page {path} could not be found.", "Hindi nahanap ang pahinang {path}."),
    ("Back to Dashboard", "Back to Dashboard", "Bumalik sa Dashboard"),
    // Tables
    ("Name", "Name", "Pangalan"),
    ("Email", "Email", "Email"),
    ("Plan", "Plan", "Plano"),
    ("Status", "Status", "Katayuan"),
    ("Priority", "Priority", "Prayoridad"),
    ("ID", "ID", "ID"),
    ("Subject", "Subject", "Paksa"),
    ("Assignee", "Assignee", "Nakatalaga"),
    ("Unassigned", "Unassigned", "Walang nakatalaga"),
    ("Amount", "Amount", "Halaga"),
    ("Paid", "Paid", "Bayad na"),
    ("Unpaid", "Unpaid", "Hindi pa bayad"),
    ("Active", "Active", "Aktibo"),
    ("Inactive", "Inactive", "Hindi aktibo"),
    ("Suspended", "Suspended", "Suspendido"),
    ("Subscribers", "Subscribers", "Mga Subscriber"),
    ("Time", "Time", "Oras"),
    ("Actor", "Actor", "Gumawa"),
    ("Action", "Action", "Aksyon"),
    ("Tenant", "Tenant", "Tenant"),
    ("Invoice", "Invoice", "Invoice"),
    ("Account", "Account", "Account"),
    ("Speed", "Speed", "Bilis"),
    ("Price", "Price", "Presyo"),
    ("No records", "No records", "Walang tala"),
    // Actions and forms
    ("Create Ticket", "Create Ticket", "Gumawa ng Tiket"),
    ("Customer e-mail", "Customer e-mail", "E-mail ng customer"),
    ("Description", "Description", "Paglalarawan"),
    ("Register Device", "Register Device", "Magrehistro ng Device"),
    ("Hostname", "Hostname", "Hostname"),
    ("IP address", "IP address", "IP address"),
    ("Location", "Location", "Lokasyon"),
    ("Save Plan", "Save Plan", "I-save ang Plano"),
    ("Plan name", "Plan name", "Pangalan ng plano"),
    ("Monthly price", "Monthly price", "Buwanang presyo"),
    ("Speed (Mbps)", "Speed (Mbps)", "Bilis (Mbps)"),
    ("Approve Refund", "Approve Refund", "Aprubahan ang Refund"),
    ("Suspend", "Suspend", "Suspindihin"),
    ("Subscribe", "Subscribe", "Mag-subscribe"),
    // Toasts
    ("Ticket {id} created", "Ticket {id} created", "Nagawa ang tiket {id}"),
    ("Device {name} registered", "Device {name} registered", "Nairehistro ang device na {name}"),
    ("Plan {name} saved", "Plan {name} saved", "Nai-save ang planong {name}"),
    ("Refund approved for {invoice}", "Refund approved for {invoice}", "Naaprubahan ang refund para sa {invoice}"),
    ("Tenant {name} suspended", "Tenant {name} suspended", "Sinuspinde ang tenant na {name}"),
    ("Subscribed to {plan}", "Subscribed to {plan}", "Naka-subscribe sa {plan}"),
    // Page content
    ("Search customers", "Search customers", "Maghanap ng customer"),
    ("Online", "Online", "Online"),
    ("Degraded", "Degraded", "Mahina"),
    ("Offline", "Offline", "Offline"),
    ("Open", "Open", "Bukas"),
    ("In Progress", "In Progress", "Ginagawa"),
    ("Resolved", "Resolved", "Nalutas"),
    ("Low", "Low", "Mababa"),
    ("Medium", "Medium", "Katamtaman"),
    ("High", "High", "Mataas"),
    ("Critical", "Critical", "Kritikal"),
    ("Job Sites", "Job Sites", "Mga Lugar ng Trabaho"),
    ("Revenue by Plan", "Revenue by Plan", "Kita ayon sa Plan"),
    ("Ticket Resolution", "Ticket Resolution", "Paglutas ng Ticket"),
    ("Maintenance mode", "Maintenance mode", "Maintenance mode"),
    ("Allow new tenant sign-ups", "Allow new tenant sign-ups", "Payagan ang bagong tenant"),
    ("E-mail notifications", "E-mail notifications", "Mga abiso sa e-mail"),
    ("Auto-assign tickets", "Auto-assign tickets", "Awtomatikong mag-assign ng ticket"),
    ("Settings saved", "Settings saved", "Na-save ang settings"),
    ("Save", "Save", "I-save"),
    ("Appearance", "Appearance", "Itsura"),
    ("Equipment", "Equipment", "Kagamitan"),
    // Validation messages
    (
        "Subject must be 3 to 120 characters",
        "Subject must be 3 to 120 characters",
        "Ang paksa ay dapat 3 hanggang 120 karakter",
    ),
    ("Enter a valid e-mail address", "Enter a valid e-mail address", "Maglagay ng wastong e-mail address"),
    ("Hostname is required", "Hostname is required", "Kailangan ang hostname"),
    (
        "Enter a valid IPv4 or IPv6 address",
        "Enter a valid IPv4 or IPv6 address",
        "Maglagay ng wastong IPv4 o IPv6 address",
    ),
    ("Plan name is required", "Plan name is required", "Kailangan ang pangalan ng plano"),
    (
        "Price must be a non-negative amount like 1499.00",
        "Price must be a non-negative amount like 1499.00",
        "Ang presyo ay dapat hindi negatibong halaga gaya ng 1499.00",
    ),
    (
        "Speed must be between 1 and 10000 Mbps",
        "Speed must be between 1 and 10000 Mbps",
        "Ang bilis ay dapat nasa pagitan ng 1 at 10000 Mbps",
    ),
];

fn table() -> &'static HashMap<&'static str, (&'static str, &'static str)> {
    static TABLE: OnceLock<HashMap<&'static str, (&'static str, &'static str)>> = OnceLock::new();
    TABLE.get_or_init(|| {
        CATALOG
            .iter()
            .map(|(key, en, fil)| (*key, (*en, *fil)))
            .collect()
    })
}

/// Stored string for `key` in `language`, if the key is in the catalog.
pub fn lookup(key: &str, language: Language) -> Option<&'static str> {
    table().get(key).map(|(en, fil)| match language {
        Language::English => *en,
        Language::Filipino => *fil,
    })
}

/// Replace `{name}` placeholders with values from `args`.
///
/// Placeholders without a matching argument are kept verbatim, as is an
/// unterminated `{`.
pub fn interpolate(template: &str, args: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) => {
                let name = &after[..close];
                match args.iter().find(|(k, _)| *k == name) {
                    Some((_, value)) => out.push_str(value),
                    None => {
                        out.push('{');
                        out.push_str(name);
                        out.push('}');
                    }
                }
                rest = &after[close + 1..];
            }
            None => {
                out.push_str(&rest[open..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

/// Translates keys for the active language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Translator {
    language: Language,
}

impl Translator {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    /// Translator for the persisted language.
    pub fn load<S: PreferenceStore>(prefs: &Preferences<S>) -> Self {
        Self::new(prefs.language())
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Switch language in memory only.
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// Switch language and persist the choice. The switch takes effect even
    /// if the write fails; the error is returned for the caller to report.
    pub fn switch_language<S: PreferenceStore>(
        &mut self,
        prefs: &mut Preferences<S>,
        language: Language,
    ) -> Result<(), AppError> {
        self.language = language;
        tracing::info!(language = language.as_str(), "Language switched");
        prefs.set_language(language)
    }

    /// Stored string for `key`, or `key` itself when untranslated.
    pub fn translate<'k>(&self, key: &'k str) -> &'k str {
        lookup(key, self.language).unwrap_or(key)
    }

    /// Translate the template `key`, then fill its placeholders.
    pub fn translate_with(&self, key: &str, args: &[(&str, &str)]) -> String {
        interpolate(self.translate(key), args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefs::{FileStore, MemoryStore};
    use shared_types::ALL_LANGUAGES;

    #[test]
    fn every_catalog_entry_round_trips() {
        for (key, en, fil) in CATALOG {
            assert_eq!(Translator::new(Language::English).translate(key), *en);
            assert_eq!(Translator::new(Language::Filipino).translate(key), *fil);
        }
    }

    #[test]
    fn catalog_keys_are_unique() {
        assert_eq!(table().len(), CATALOG.len());
    }

    #[test]
    fn english_values_equal_keys() {
        for (key, en, _) in CATALOG {
            assert_eq!(key, en);
        }
    }

    #[test]
    fn absent_key_passes_through_for_every_language() {
        for lang in ALL_LANGUAGES {
            let t = Translator::new(*lang);
            assert_eq!(t.translate("Reticulate splines"), "Reticulate splines");
            assert_eq!(t.translate(""), "");
        }
    }

    #[test]
    fn filipino_differs_for_navigation() {
        let t = Translator::new(Language::Filipino);
        assert_eq!(t.translate("Tickets"), "Mga Tiket");
        assert_eq!(t.translate("Billing"), "Pagsingil");
    }

    #[test]
    fn interpolation_happens_after_lookup() {
        let t = Translator::new(Language::Filipino);
        assert_eq!(
            t.translate_with("Welcome back, {name}", &[("name", "Ana")]),
            "Maligayang pagbabalik, Ana"
        );
        let t = Translator::new(Language::English);
        assert_eq!(
            t.translate_with("Ticket {id} created", &[("id", "TCK-1042")]),
            "Ticket TCK-1042 created"
        );
    }

    #[test]
    fn interpolate_edge_cases() {
        assert_eq!(interpolate("{a}{b}", &[("a", "1"), ("b", "2")]), "12");
        assert_eq!(interpolate("hello {who}", &[]), "hello {who}");
        assert_eq!(interpolate("open {brace", &[("brace", "x")]), "open {brace");
        assert_eq!(interpolate("no placeholders", &[("x", "y")]), "no placeholders");
        assert_eq!(interpolate("{a} and {a}", &[("a", "z")]), "z and z");
    }

    #[test]
    fn untranslated_template_still_interpolates() {
        let t = Translator::new(Language::Filipino);
        assert_eq!(t.translate_with("{n} widgets", &[("n", "3")]), "3 widgets");
    }

    #[test]
    fn switch_language_persists() {
        let mut prefs = Preferences::load(MemoryStore::new(), Language::English);
        let mut t = Translator::load(&prefs);
        assert_eq!(t.language(), Language::English);
        t.switch_language(&mut prefs, Language::Filipino).unwrap();
        assert_eq!(t.language(), Language::Filipino);
        assert_eq!(prefs.language(), Language::Filipino);
    }

    #[test]
    fn language_survives_restart() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        {
            let mut prefs = Preferences::load(FileStore::open(&path), Language::English);
            let mut t = Translator::load(&prefs);
            t.switch_language(&mut prefs, Language::Filipino).unwrap();
        }
        let prefs = Preferences::load(FileStore::open(&path), Language::English);
        assert_eq!(Translator::load(&prefs).language(), Language::Filipino);
    }
}
