//! User settings, read from `<config dir>/ruler/settings.json`.
//!
//! The file is optional and never written by the app. Every field has a
//! default, so a partial file only overrides what it names.

use crate::constants::{DEFAULT_LEFT_CM, DEFAULT_RIGHT_CM, DEFAULT_UNITS_PER_INCH};
use crate::cursor::Cursors;
use crate::error::{SettingsError, SettingsResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Logical units the host draws per physical inch
    pub units_per_inch: f32,
    /// Where the left cursor starts, in centimeters
    pub initial_left_cm: f32,
    /// Where the right cursor starts, in centimeters
    pub initial_right_cm: f32,
    /// Show the value label under each cursor
    pub show_cursor_labels: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            units_per_inch: DEFAULT_UNITS_PER_INCH,
            initial_left_cm: DEFAULT_LEFT_CM,
            initial_right_cm: DEFAULT_RIGHT_CM,
            show_cursor_labels: true,
        }
    }
}

/// Location of the settings file, if the platform has a config directory
pub fn settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("ruler").join("settings.json"))
}

impl Settings {
    /// Load settings from the default location, falling back to defaults.
    pub fn load() -> Self {
        match settings_path() {
            Some(path) => Self::load_or_default(&path),
            None => {
                tracing::warn!("{}", SettingsError::NoConfigDir);
                Self::default()
            }
        }
    }

    /// Load from `path`; a missing file is silent, anything else is logged.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load_from(path) {
            Ok(settings) => {
                tracing::debug!(path = %path.display(), "Loaded settings");
                settings
            }
            Err(SettingsError::NotFound(_)) => Self::default(),
            Err(e) => {
                tracing::warn!(path = %path.display(), "Using default settings: {}", e);
                Self::default()
            }
        }
    }

    /// Read, parse and validate a settings file.
    pub fn load_from(path: &Path) -> SettingsResult<Self> {
        let contents = fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => SettingsError::NotFound(path.to_path_buf()),
            _ => SettingsError::Io(e),
        })?;
        let settings: Settings = serde_json::from_str(&contents)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> SettingsResult<()> {
        if !(self.units_per_inch.is_finite() && self.units_per_inch > 0.0) {
            return Err(SettingsError::invalid(
                "units_per_inch",
                format!("must be a positive number, got {}", self.units_per_inch),
            ));
        }
        if self.initial_cursors().is_none() {
            return Err(SettingsError::invalid(
                "initial_left_cm",
                format!(
                    "cursors need 0 <= left < right, got {} and {}",
                    self.initial_left_cm, self.initial_right_cm
                ),
            ));
        }
        Ok(())
    }

    /// Starting cursor pair, or `None` if the configured positions are unusable
    pub fn initial_cursors(&self) -> Option<Cursors> {
        Cursors::new(self.initial_left_cm, self.initial_right_cm)
    }
}
