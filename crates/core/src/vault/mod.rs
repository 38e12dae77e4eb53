//! Filesystem implementation of the host services over a markdown vault.

pub mod daily;
pub mod index;
pub mod link;
pub mod settings_store;
pub mod walker;

pub use daily::{FsDailyNotes, render_template};
pub use index::FsNoteIndex;
pub use link::{LinkStyle, VaultLinks};
pub use settings_store::FileSettingsStore;
pub use walker::{VaultWalker, VaultWalkerError, WalkedFile, to_vault_path};

use std::path::{Path, PathBuf};

use crate::config::ResolvedConfig;
use crate::host::DailyNoteSettings;

/// All host services for one vault.
#[derive(Debug, Clone)]
pub struct Vault {
    root: PathBuf,
    pub index: FsNoteIndex,
    pub daily: FsDailyNotes,
    pub links: VaultLinks,
    pub settings: FileSettingsStore,
    pub person_tag: String,
}

impl Vault {
    pub fn open(cfg: &ResolvedConfig) -> Result<Self, VaultWalkerError> {
        let walker = VaultWalker::with_exclusions(&cfg.vault_root, cfg.excluded_folders.clone())?;
        let root = walker.root().to_path_buf();

        let daily = FsDailyNotes::new(
            &root,
            DailyNoteSettings { folder: cfg.daily.folder.clone(), format: cfg.daily.format.clone() },
        )
        .with_template(cfg.daily.template.clone())
        .with_enabled(cfg.daily.enabled);

        Ok(Self {
            index: FsNoteIndex::new(walker),
            daily,
            links: VaultLinks::new(cfg.link_style),
            settings: FileSettingsStore::new(&root),
            person_tag: cfg.person_tag.clone(),
            root,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}
