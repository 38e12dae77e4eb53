use std::collections::HashMap;
use std::path::PathBuf;

use serde::Deserialize;

use crate::mention::DEFAULT_PERSON_TAG;
use crate::vault::LinkStyle;

#[derive(Debug, Deserialize)]
pub struct ConfigFile {
    pub version: u32,
    pub profile: Option<String>,
    pub profiles: HashMap<String, Profile>,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize)]
pub struct Profile {
    pub vault_root: String,
    /// Frontmatter tag that marks a note as mentionable.
    #[serde(default = "default_person_tag")]
    pub person_tag: String,
    #[serde(default)]
    pub link_style: LinkStyle,
    /// Folders to skip when listing notes (relative to vault_root).
    #[serde(default)]
    pub excluded_folders: Vec<String>,
    #[serde(default)]
    pub daily: DailyConfig,
}

/// `[profiles.<name>.daily]`
#[derive(Debug, Deserialize, Clone)]
pub struct DailyConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Vault-relative folder for daily notes.
    #[serde(default)]
    pub folder: String,
    /// chrono strftime format of the note name.
    #[serde(default = "default_daily_format")]
    pub format: String,
    /// Template used for new daily notes; supports `{{vault_root}}`.
    #[serde(default)]
    pub template: Option<String>,
}

impl Default for DailyConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            folder: String::new(),
            format: default_daily_format(),
            template: None,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub file_level: Option<String>,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), file_level: None, file: None }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_person_tag() -> String {
    DEFAULT_PERSON_TAG.to_string()
}

fn default_daily_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone)]
pub struct ResolvedDaily {
    pub enabled: bool,
    pub folder: String,
    pub format: String,
    /// Absolute path of the template, if configured.
    pub template: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub active_profile: String,
    pub vault_root: PathBuf,
    pub person_tag: String,
    pub link_style: LinkStyle,
    /// Excluded folders resolved to absolute paths.
    pub excluded_folders: Vec<PathBuf>,
    pub daily: ResolvedDaily,
    pub logging: LoggingConfig,
}
