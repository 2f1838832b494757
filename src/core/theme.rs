//! # Theme
//!
//! The user's theme preference and the system appearance signal, combined
//! into the appearance the UI actually renders with.
//!
//! ```text
//! preference   system    effective
//! ──────────   ──────    ─────────
//! auto         dark   →  dark
//! auto         light  →  light
//! light        any    →  light
//! dark         any    →  dark
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Auto,
    Light,
    Dark,
}

impl ThemePreference {
    pub const ALL: [ThemePreference; 3] = [Self::Auto, Self::Light, Self::Dark];

    /// The persisted string form.
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemePreference::Auto => "auto",
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ThemePreference::Auto => "Auto (System)",
            ThemePreference::Light => "Light",
            ThemePreference::Dark => "Dark",
        }
    }

    /// Strict parse of the persisted form. Anything else is `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "auto" => Some(ThemePreference::Auto),
            "light" => Some(ThemePreference::Light),
            "dark" => Some(ThemePreference::Dark),
            _ => None,
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Appearance {
    Light,
    Dark,
}

impl Appearance {
    pub fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark {
            Appearance::Dark
        } else {
            Appearance::Light
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Appearance::Dark)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeState {
    preference: ThemePreference,
    system: Appearance,
}

impl ThemeState {
    pub fn new(preference: ThemePreference, system: Appearance) -> Self {
        Self { preference, system }
    }

    pub fn preference(&self) -> ThemePreference {
        self.preference
    }

    pub fn system(&self) -> Appearance {
        self.system
    }

    /// What the UI renders with right now.
    pub fn appearance(&self) -> Appearance {
        match self.preference {
            ThemePreference::Auto => self.system,
            ThemePreference::Light => Appearance::Light,
            ThemePreference::Dark => Appearance::Dark,
        }
    }

    pub fn set_preference(&mut self, preference: ThemePreference) {
        self.preference = preference;
    }

    /// Record a system appearance change. Ignored unless the preference is auto.
    ///
    /// Returns true when the effective appearance changed.
    pub fn system_changed(&mut self, prefers_dark: bool) -> bool {
        if self.preference != ThemePreference::Auto {
            return false;
        }
        let before = self.appearance();
        self.system = Appearance::from_prefers_dark(prefers_dark);
        before != self.appearance()
    }
}

// ============================================================================
// System signal
// ============================================================================

/// Source of the host's colour-scheme preference.
pub trait SystemAppearance {
    fn prefers_dark(&self) -> bool;
}

/// Reads the `COLORFGBG` convention (`"fg;bg"` or `"fg;default;bg"`) set by
/// rxvt, Konsole and friends.
pub struct ColorFgBg {
    value: Option<String>,
}

impl ColorFgBg {
    pub fn from_env() -> Self {
        Self {
            value: std::env::var("COLORFGBG").ok(),
        }
    }

    pub fn from_value(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
        }
    }
}

impl SystemAppearance for ColorFgBg {
    fn prefers_dark(&self) -> bool {
        let bg = self
            .value
            .as_deref()
            .and_then(|v| v.rsplit(';').next())
            .and_then(|bg| bg.trim().parse::<u8>().ok());
        match bg {
            // 7 and 9..=15 are the light ANSI backgrounds
            Some(0..=6) | Some(8) => true,
            Some(_) => false,
            None => true,
        }
    }
}

/// Fixed answer, for tests and `--theme` overrides.
pub struct FixedAppearance(pub bool);

impl SystemAppearance for FixedAppearance {
    fn prefers_dark(&self) -> bool {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_follows_system() {
        let mut theme = ThemeState::new(ThemePreference::Auto, Appearance::Dark);
        assert_eq!(theme.appearance(), Appearance::Dark);
        assert!(theme.system_changed(false));
        assert_eq!(theme.appearance(), Appearance::Light);
    }

    #[test]
    fn test_system_recorded_under_auto() {
        let mut theme = ThemeState::new(ThemePreference::Auto, Appearance::Light);
        assert!(!theme.system().is_dark());
        theme.system_changed(true);
        assert!(theme.system().is_dark());
        assert!(theme.appearance().is_dark());
    }

    #[test]
    fn test_explicit_preference_ignores_system() {
        let mut theme = ThemeState::new(ThemePreference::Light, Appearance::Dark);
        assert_eq!(theme.appearance(), Appearance::Light);
        assert!(!theme.system_changed(true));
        assert_eq!(theme.appearance(), Appearance::Light);

        theme.set_preference(ThemePreference::Dark);
        assert!(!theme.system_changed(false));
        assert_eq!(theme.appearance(), Appearance::Dark);
        assert_eq!(theme.system(), Appearance::Dark);
    }

    #[test]
    fn test_system_change_is_idempotent() {
        let mut theme = ThemeState::new(ThemePreference::Auto, Appearance::Light);
        assert!(theme.system_changed(true));
        assert!(!theme.system_changed(true));
        assert_eq!(theme.appearance(), Appearance::Dark);
    }

    #[test]
    fn test_parse_is_strict() {
        assert_eq!(ThemePreference::parse("dark"), Some(ThemePreference::Dark));
        assert_eq!(ThemePreference::parse("auto"), Some(ThemePreference::Auto));
        assert_eq!(ThemePreference::parse("Dark"), None);
        assert_eq!(ThemePreference::parse("blue"), None);
        assert_eq!(ThemePreference::parse(""), None);
    }

    #[test]
    fn test_as_str_round_trips_through_parse() {
        for pref in ThemePreference::ALL {
            assert_eq!(ThemePreference::parse(pref.as_str()), Some(pref));
        }
    }

    #[test]
    fn test_serde_uses_lowercase() {
        let json = serde_json::to_string(&ThemePreference::Light).unwrap();
        assert_eq!(json, "\"light\"");
    }

    #[test]
    fn test_colorfgbg_dark_backgrounds() {
        assert!(ColorFgBg::from_value("15;0").prefers_dark());
        assert!(ColorFgBg::from_value("15;default;8").prefers_dark());
        assert!(ColorFgBg::from_value("7;4").prefers_dark());
    }

    #[test]
    fn test_colorfgbg_light_backgrounds() {
        assert!(!ColorFgBg::from_value("0;15").prefers_dark());
        assert!(!ColorFgBg::from_value("0;7").prefers_dark());
        assert!(!ColorFgBg::from_value("0;default;11").prefers_dark());
    }

    #[test]
    fn test_colorfgbg_unknown_assumes_dark() {
        assert!(ColorFgBg::from_value("garbage").prefers_dark());
        assert!(ColorFgBg::from_value("0;default").prefers_dark());
        assert!(ColorFgBg { value: None }.prefers_dark());
    }
}
