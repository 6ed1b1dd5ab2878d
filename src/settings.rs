use directories::ProjectDirs;
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::SettingsError;
use crate::validation::{LengthBounds, MAX_LENGTH, MIN_LENGTH};

/// Hard limits applied to whatever the settings file says.
const LENGTH_FLOOR: usize = 1;
const LENGTH_CEILING: usize = 1024;

/// Application settings. Read-only: the app never writes this file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Shortest accepted password length (default 8)
    pub min_length: usize,
    /// Longest accepted password length (default 50)
    pub max_length: usize,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            min_length: MIN_LENGTH,
            max_length: MAX_LENGTH,
        }
    }
}

impl AppSettings {
    /// Returns the path to the settings file, if a data directory exists
    pub fn settings_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "FormPass", "FormPass")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from the platform config directory, or defaults.
    pub fn load() -> Self {
        match Self::settings_path() {
            Some(path) if path.exists() => Self::load_or_default(&path),
            _ => Self::default(),
        }
    }

    /// Load from `path`, logging and falling back to defaults on any error.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::read_from(path) {
            Ok(settings) => settings,
            Err(e) => {
                warn!("Ignoring settings at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn read_from(path: &Path) -> Result<Self, SettingsError> {
        let data = fs::read_to_string(path)?;
        let mut settings: AppSettings = serde_json::from_str(&data)?;
        settings.clamp();
        Ok(settings)
    }

    /// Keep both bounds within hard limits and ordered.
    pub fn clamp(&mut self) {
        self.min_length = self.min_length.clamp(LENGTH_FLOOR, LENGTH_CEILING);
        self.max_length = self.max_length.clamp(self.min_length, LENGTH_CEILING);
    }

    pub fn length_bounds(&self) -> LengthBounds {
        LengthBounds {
            min: self.min_length,
            max: self.max_length,
        }
    }
}

// ------------------ TESTS ------------------
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = AppSettings::default();
        assert_eq!(settings.min_length, 8);
        assert_eq!(settings.max_length, 50);
        assert_eq!(settings.length_bounds(), LengthBounds::default());
    }

    #[test]
    fn test_clamping() {
        let mut settings = AppSettings {
            min_length: 0,
            max_length: 5000,
        };
        settings.clamp();
        assert_eq!(settings.min_length, 1);
        assert_eq!(settings.max_length, 1024);

        // Inverted bounds
        let mut settings = AppSettings {
            min_length: 30,
            max_length: 10,
        };
        settings.clamp();
        assert_eq!(settings.min_length, 30);
        assert_eq!(settings.max_length, 30);
    }

    #[test]
    fn test_read_partial_file_uses_defaults_for_missing_keys() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{ "max_length": 64 }"#).unwrap();

        let settings = AppSettings::read_from(&path).unwrap();
        assert_eq!(settings.min_length, 8);
        assert_eq!(settings.max_length, 64);
    }

    #[test]
    fn test_malformed_file_falls_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "not json").unwrap();

        assert!(matches!(
            AppSettings::read_from(&path),
            Err(SettingsError::Parse(_))
        ));
        assert_eq!(AppSettings::load_or_default(&path), AppSettings::default());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.json");
        assert!(matches!(
            AppSettings::read_from(&path),
            Err(SettingsError::Io(_))
        ));
    }
}
