//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.devdocs/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{LevelFilter, debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::theme::ThemePreference;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DevdocsConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub catalog_file: Option<String>,
    pub log_file: Option<String>,
    pub log_level: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct UiConfig {
    pub sidebar_width: Option<u16>,
    pub show_item_counts: Option<bool>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_SIDEBAR_WIDTH: u16 = 32;
pub const MIN_SIDEBAR_WIDTH: u16 = 16;
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// `None` means the catalog embedded in the binary.
    pub catalog_file: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
    pub log_level: LevelFilter,
    pub sidebar_width: u16,
    pub show_item_counts: bool,
    /// Replaces the persisted theme for this session when set.
    pub theme_override: Option<ThemePreference>,
    /// Problems found while resolving. Resolution runs before the logger
    /// exists, so these are reported by `log_summary` afterwards.
    pub notices: Vec<String>,
}

impl ResolvedConfig {
    /// Log the resolved values and any deferred notices.
    pub fn log_summary(&self) {
        info!(
            "Config: catalog={}, log_level={}, sidebar_width={}, show_item_counts={}, theme_override={}",
            self.catalog_file
                .as_ref()
                .map_or_else(|| "built-in".to_string(), |p| p.display().to_string()),
            self.log_level,
            self.sidebar_width,
            self.show_item_counts,
            self.theme_override
                .map_or_else(|| "none".to_string(), |t| t.to_string()),
        );
        for notice in &self.notices {
            warn!("{}", notice);
        }
    }
}

/// Values supplied on the command line. `None` = not specified.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub catalog: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
    pub theme: Option<ThemePreference>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns `~/.devdocs`.
pub fn data_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".devdocs"))
}

/// Returns the path to `~/.devdocs/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    data_dir().map(|d| d.join("config.toml"))
}

/// Load config from `~/.devdocs/config.toml`.
pub fn load_config() -> Result<DevdocsConfig, ConfigError> {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => {
            warn!("Could not determine home directory, using default config");
            Ok(DevdocsConfig::default())
        }
    }
}

/// Load config from `path`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `DevdocsConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config_from(path: &Path) -> Result<DevdocsConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(DevdocsConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: DevdocsConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# devdocs configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# catalog_file = "my-catalog.toml"   # Or DEVDOCS_CATALOG / --catalog; default is built in
# log_file = "/tmp/devdocs.log"      # Or DEVDOCS_LOG_FILE / --log-file
# log_level = "info"                 # "error", "warn", "info", "debug", "trace", "off"

# [ui]
# sidebar_width = 32
# show_item_counts = true
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &DevdocsConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// `resolve` with an injectable environment lookup.
pub fn resolve_with_env(
    config: &DevdocsConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Catalog: CLI → env → config → builtin
    let catalog_file = cli
        .catalog
        .clone()
        .or_else(|| env("DEVDOCS_CATALOG").map(PathBuf::from))
        .or_else(|| config.general.catalog_file.as_ref().map(PathBuf::from));

    // Log file: CLI → env → config → ~/.devdocs/devdocs.log
    let log_file = cli
        .log_file
        .clone()
        .or_else(|| env("DEVDOCS_LOG_FILE").map(PathBuf::from))
        .or_else(|| config.general.log_file.as_ref().map(PathBuf::from))
        .or_else(|| data_dir().map(|d| d.join("devdocs.log")));

    let mut notices = Vec::new();

    // Log level: env → config → default
    let log_level = match env("DEVDOCS_LOG_LEVEL").or_else(|| config.general.log_level.clone()) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            notices.push(format!(
                "Unknown log level '{}', using {}",
                raw, DEFAULT_LOG_LEVEL
            ));
            DEFAULT_LOG_LEVEL
        }),
        None => DEFAULT_LOG_LEVEL,
    };

    let sidebar_width = config
        .ui
        .sidebar_width
        .unwrap_or(DEFAULT_SIDEBAR_WIDTH)
        .max(MIN_SIDEBAR_WIDTH);

    ResolvedConfig {
        catalog_file,
        log_file,
        log_level,
        sidebar_width,
        show_item_counts: config.ui.show_item_counts.unwrap_or(true),
        theme_override: cli.theme,
        notices,
    }
}
