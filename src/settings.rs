//! Settings persistence
//!
//! Loads and saves [`Settings`] as JSON. Unless a path is given explicitly,
//! settings live in `settings.json` in the platform configuration directory
//! (e.g. `~/.config/quoridor/settings.json` on Linux).
//!
//! # Error Handling
//!
//! - Implicit load: a missing, unreadable or invalid file falls back to the
//!   defaults with a log line, so the program always starts
//! - Explicit load (`--config PATH`): every failure is returned to the caller

use crate::error::{SettingsError, SettingsResult};
use directories::ProjectDirs;
use quoridor_engine::constants::{DEFAULT_DIMENSION, DEFAULT_WALLS};
use quoridor_engine::{BoardModel, SearchLimits};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Settings filename
const SETTINGS_FILENAME: &str = "settings.json";

/// Default ply limit for a self-play game
pub const DEFAULT_MAX_PLIES: u32 = 400;

/// Everything needed to set up and run a game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Board side length (odd)
    pub dimension: u8,
    /// Wall tokens each player starts with
    pub walls_per_player: u8,
    /// Per-decision search budget
    pub search: SearchLimits,
    /// Self-play stops after this many plies without a winner
    pub max_plies: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dimension: DEFAULT_DIMENSION,
            walls_per_player: DEFAULT_WALLS,
            search: SearchLimits::default(),
            max_plies: DEFAULT_MAX_PLIES,
        }
    }
}

impl Settings {
    /// Check that the settings describe a playable game
    pub fn validate(&self) -> SettingsResult<()> {
        BoardModel::validate_dimension(self.dimension).map_err(|e| SettingsError::Invalid {
            message: e.to_string(),
        })?;
        if self.max_plies == 0 {
            return Err(SettingsError::Invalid {
                message: "max_plies must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Load and validate settings from `path`
    pub fn load_from(path: &Path) -> SettingsResult<Self> {
        let contents = fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&contents)?;
        settings.validate()?;
        info!("[SETTINGS] Loaded settings from {:?}", path);
        Ok(settings)
    }

    /// Load from the default location, falling back to defaults on any failure
    pub fn load_or_default() -> Self {
        let path = settings_path();
        if !path.exists() {
            info!("[SETTINGS] No settings file found at {:?}. Using defaults.", path);
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(settings) => settings,
            Err(e) => {
                warn!(
                    "[SETTINGS] Failed to load settings file at {:?}: {}. Using defaults.",
                    path, e
                );
                Self::default()
            }
        }
    }

    /// Write settings as pretty JSON, creating parent directories
    pub fn save_to(&self, path: &Path) -> SettingsResult<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        info!("[SETTINGS] Saved settings to {:?}", path);
        Ok(())
    }
}

/// Resolve the settings file path
///
/// Falls back to `settings.json` in the working directory when the platform
/// configuration directory cannot be determined.
pub fn settings_path() -> PathBuf {
    match ProjectDirs::from("com", "trilltino", "Quoridor") {
        Some(proj_dirs) => proj_dirs.config_dir().join(SETTINGS_FILENAME),
        None => PathBuf::from(SETTINGS_FILENAME),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.dimension, 9);
        assert_eq!(settings.walls_per_player, 10);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{ "dimension": 7, "search": { "max_depth": 4 } }"#).unwrap();
        assert_eq!(settings.dimension, 7);
        assert_eq!(settings.search.max_depth, 4);
        assert_eq!(settings.search.think_time_ms, SearchLimits::default().think_time_ms);
        assert_eq!(settings.walls_per_player, DEFAULT_WALLS);
    }

    #[test]
    fn test_even_dimension_is_invalid() {
        let settings = Settings {
            dimension: 8,
            ..Settings::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::Invalid { .. })
        ));
    }

    #[test]
    fn test_settings_path_file_name() {
        assert_eq!(
            settings_path().file_name().and_then(|n| n.to_str()),
            Some(SETTINGS_FILENAME)
        );
    }
}
