//! Settings persisted inside the vault.

use std::fs;
use std::path::{Path, PathBuf};

use crate::host::{HostResult, SettingsStore};
use crate::settings::{Settings, SettingsError};

/// Stores [`Settings`] at `<vault>/.daylink/settings.toml`.
#[derive(Debug, Clone)]
pub struct FileSettingsStore {
    path: PathBuf,
}

impl FileSettingsStore {
    const STATE_DIR: &'static str = ".daylink";
    const STATE_FILE: &'static str = "settings.toml";

    pub fn new(vault_root: &Path) -> Self {
        Self { path: vault_root.join(Self::STATE_DIR).join(Self::STATE_FILE) }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<Settings, SettingsError> {
        if !self.path.exists() {
            return Ok(Settings::default());
        }
        let content = fs::read_to_string(&self.path)?;
        Ok(toml::from_str(&content)?)
    }

    fn write(&self, settings: &Settings) -> Result<(), SettingsError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, toml::to_string_pretty(settings)?)?;
        Ok(())
    }
}

impl SettingsStore for FileSettingsStore {
    fn load(&self) -> HostResult<Settings> {
        Ok(self.read()?)
    }

    fn save(&self, settings: &Settings) -> HostResult<()> {
        Ok(self.write(settings)?)
    }
}
