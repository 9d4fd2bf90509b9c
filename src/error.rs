//! Error types for settings operations
//!
//! Loading the settings file is the only fallible operation in the app;
//! everything on the drag and render paths is validated instead of failing.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading settings
#[derive(Error, Debug)]
pub enum SettingsError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// No configuration directory on this platform
    #[error("No configuration directory available")]
    NoConfigDir,

    /// A field holds a value the ruler cannot use
    #[error("Invalid setting `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },

    /// Settings file vanished between watch event and load
    #[error("Settings file not found: {}", .0.display())]
    NotFound(PathBuf),
}

/// Result type alias for settings operations
pub type SettingsResult<T> = Result<T, SettingsError>;

impl SettingsError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        SettingsError::Invalid {
            field,
            reason: reason.into(),
        }
    }
}
