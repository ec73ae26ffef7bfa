use shared_types::{AppConfig, AppError, FeatureFlags};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Path to the config file, relative to the working directory.
const CONFIG_PATH: &str = "config.toml";

/// Environment variable overriding [`CONFIG_PATH`].
pub const CONFIG_ENV: &str = "NETDESK_CONFIG";

/// Parse config text.
pub fn parse_config(contents: &str) -> Result<AppConfig, AppError> {
    toml::from_str(contents).map_err(|e| AppError::config(e.to_string()))
}

/// Read and parse a config file.
pub fn read_config(path: &Path) -> Result<AppConfig, AppError> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| AppError::config(format!("{}: {e}", path.display())))?;
    parse_config(&contents)
}

/// Where the config file is looked up: `$NETDESK_CONFIG` (a `.env` file is
/// honored) or `config.toml`.
pub fn config_path() -> PathBuf {
    let _ = dotenvy::dotenv();
    std::env::var(CONFIG_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(CONFIG_PATH))
}

/// Read the config file and store it in the global `OnceLock`. Safe to call
/// multiple times; only the first call has effect.
///
/// If the file is missing or unparseable, every setting takes its default.
pub fn load_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        let path = config_path();
        match read_config(&path) {
            Ok(config) => {
                tracing::info!(path = %path.display(), features = ?config.features, "Loaded config");
                config
            }
            Err(e) => {
                tracing::warn!(error = %e, "Config unavailable, using defaults");
                AppConfig::default()
            }
        }
    })
}

/// Initialise from embedded config text, for targets without a filesystem.
pub fn load_config_from_str(contents: &str) -> &'static AppConfig {
    CONFIG.get_or_init(|| match parse_config(contents) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, "Embedded config invalid, using defaults");
            AppConfig::default()
        }
    })
}

/// The loaded config, or defaults if nothing has been loaded yet.
pub fn app_config() -> &'static AppConfig {
    static DEFAULT: OnceLock<AppConfig> = OnceLock::new();
    CONFIG
        .get()
        .unwrap_or_else(|| DEFAULT.get_or_init(AppConfig::default))
}

/// Shortcut for the loaded feature flags.
pub fn feature_flags() -> FeatureFlags {
    app_config().features
}
