//! # Preferences
//!
//! A tiny persisted key-value store. The only key in use is the theme flag.
//! The file lives at `~/.devdocs/preferences.json` as a flat JSON object:
//!
//! ```json
//! { "devdocs-theme": "dark" }
//! ```

use log::{debug, warn};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::core::theme::ThemePreference;

pub const THEME_KEY: &str = "devdocs-theme";

#[derive(Debug)]
pub enum PreferenceError {
    Io(io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for PreferenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreferenceError::Io(e) => write!(f, "preferences I/O error: {e}"),
            PreferenceError::Parse(e) => write!(f, "preferences parse error: {e}"),
        }
    }
}

impl std::error::Error for PreferenceError {}

pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError>;
}

// ============================================================================
// File store
// ============================================================================

pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `~/.devdocs/preferences.json`, if a home directory exists.
    pub fn default_location() -> Option<Self> {
        dirs::home_dir().map(|h| Self::new(h.join(".devdocs").join("preferences.json")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, PreferenceError> {
        match fs::read_to_string(&self.path) {
            Ok(json) => serde_json::from_str(&json).map_err(PreferenceError::Parse),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(PreferenceError::Io(e)),
        }
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        // An unreadable file is replaced rather than blocking the write
        let mut all = self.read_all().unwrap_or_else(|e| {
            warn!("Discarding unreadable preferences file: {}", e);
            BTreeMap::new()
        });
        all.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(PreferenceError::Io)?;
        }
        atomic_write_json(&self.path, &all).map_err(PreferenceError::Io)
    }
}

/// Write JSON atomically: write to .tmp, then rename.
fn atomic_write_json(path: &Path, data: &BTreeMap<String, String>) -> io::Result<()> {
    let tmp_path = path.with_extension("tmp");
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(&tmp_path, json)?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}

// ============================================================================
// In-memory store
// ============================================================================

/// Non-persistent store, used when there is no home directory and in tests.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    values: BTreeMap<String, String>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// ============================================================================
// Theme flag
// ============================================================================

/// Read the stored theme preference. Missing, invalid, or unreadable → `Auto`.
pub fn load_theme(store: &dyn PreferenceStore) -> ThemePreference {
    match store.get(THEME_KEY) {
        Ok(Some(raw)) => ThemePreference::parse(&raw).unwrap_or_else(|| {
            warn!("Ignoring invalid stored theme '{}', using auto", raw);
            ThemePreference::Auto
        }),
        Ok(None) => ThemePreference::Auto,
        Err(e) => {
            warn!("Failed to read theme preference: {}", e);
            ThemePreference::Auto
        }
    }
}

pub fn save_theme(
    store: &mut dyn PreferenceStore,
    preference: ThemePreference,
) -> Result<(), PreferenceError> {
    debug!("Persisting theme preference: {}", preference);
    store.set(THEME_KEY, preference.as_str())
}
