//! Persisted extension settings.

use serde::{Deserialize, Serialize};

use crate::dates::WeekStart;

/// Errors reading or writing the settings file.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to access settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse settings: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Settings persisted by the host's settings store.
///
/// Serialized as `start_of_week = "1"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Settings {
    /// First day of the week used for the "Next week" option.
    #[serde(default)]
    pub start_of_week: WeekStart,
}
