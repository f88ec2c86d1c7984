//! Persisted preferences
//!
//! Only window-level settings are stored. Calculator registers never are.

use std::path::{Path, PathBuf};

use chococore::storage::{self, config_dir};
use serde::{Deserialize, Serialize};

/// Overrides `font_size` when set to a positive number.
pub const FONT_SIZE_ENV: &str = "CHOCOCALC_FONT_SIZE";

const MIN_FONT_SIZE: f32 = 8.0;
const MAX_FONT_SIZE: f32 = 64.0;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    /// Font size for the display and buttons, in points
    #[serde(default = "default_font_size")]
    pub font_size: f32,
    /// Keep the window above other windows
    #[serde(default)]
    pub always_on_top: bool,
    /// Enter = equals, Escape/Backspace = clear
    #[serde(default = "default_named_keys")]
    pub named_keys: bool,
}

fn default_font_size() -> f32 {
    20.0
}

fn default_named_keys() -> bool {
    true
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            font_size: default_font_size(),
            always_on_top: false,
            named_keys: default_named_keys(),
        }
    }
}

impl Preferences {
    pub fn config_path() -> PathBuf {
        config_dir("chococalc").join("preferences.json")
    }

    /// Load from the user config dir, writing defaults on first launch.
    pub fn load() -> Self {
        let prefs = Self::load_from(&Self::config_path()).with_env_overrides();
        tracing::debug!(?prefs, "preferences loaded");
        prefs
    }

    /// Load from `path`. Never fails: a missing file writes and returns
    /// defaults, an unreadable one returns defaults untouched on disk.
    pub fn load_from(path: &Path) -> Self {
        match storage::load_json::<Preferences>(path) {
            Ok(prefs) => prefs.sanitized(),
            Err(e) if e.is_not_found() => {
                let prefs = Self::default();
                match prefs.save_to(path) {
                    Ok(()) => tracing::info!(path = %path.display(), "wrote default preferences"),
                    Err(e) => tracing::warn!(path = %path.display(), error = %e, "could not write default preferences"),
                }
                prefs
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable preferences");
                Self::default()
            }
        }
    }

    pub fn save_to(&self, path: &Path) -> storage::Result<()> {
        storage::save_json(self, path)
    }

    fn with_env_overrides(self) -> Self {
        let raw = std::env::var(FONT_SIZE_ENV).ok();
        self.with_font_size_override(raw.as_deref())
    }

    fn with_font_size_override(mut self, raw: Option<&str>) -> Self {
        if let Some(raw) = raw {
            match raw.trim().parse::<f32>() {
                Ok(size) if size > 0.0 => self.font_size = size,
                _ => tracing::warn!(value = raw, "ignoring invalid {}", FONT_SIZE_ENV),
            }
        }
        self.sanitized()
    }

    fn sanitized(mut self) -> Self {
        if !self.font_size.is_finite() {
            self.font_size = default_font_size();
        }
        self.font_size = self.font_size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chococalc").join("preferences.json");

        let prefs = Preferences::load_from(&path);
        assert_eq!(prefs, Preferences::default());
        assert!(path.exists());
    }

    #[test]
    fn test_round_trip_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        let prefs = Preferences {
            font_size: 28.0,
            always_on_top: true,
            named_keys: false,
        };
        prefs.save_to(&path).unwrap();
        assert_eq!(Preferences::load_from(&path), prefs);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        std::fs::write(&path, r#"{ "always_on_top": true }"#).unwrap();

        let prefs = Preferences::load_from(&path);
        assert!(prefs.always_on_top);
        assert_eq!(prefs.font_size, 20.0);
        assert!(prefs.named_keys);
    }

    #[test]
    fn test_malformed_file_falls_back_and_is_kept() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        std::fs::write(&path, "font_size = 30").unwrap();

        assert_eq!(Preferences::load_from(&path), Preferences::default());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "font_size = 30");
    }

    #[test]
    fn test_font_size_is_clamped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        std::fs::write(&path, r#"{ "font_size": 500.0 }"#).unwrap();
        assert_eq!(Preferences::load_from(&path).font_size, MAX_FONT_SIZE);
    }

    #[test]
    fn test_font_size_override() {
        let base = Preferences::default();
        assert_eq!(base.clone().with_font_size_override(Some("32")).font_size, 32.0);
        assert_eq!(base.clone().with_font_size_override(Some("-3")).font_size, 20.0);
        assert_eq!(base.clone().with_font_size_override(Some("big")).font_size, 20.0);
        assert_eq!(base.with_font_size_override(None).font_size, 20.0);
    }
}
