//! Markdown note discovery under a vault root.

use std::path::{Component, Path, PathBuf};

use thiserror::Error;
use walkdir::WalkDir;

#[derive(Debug, Error)]
pub enum VaultWalkerError {
    #[error("vault root does not exist: {0}")]
    MissingRoot(String),

    #[error("failed to walk vault directory {0}: {1}")]
    WalkError(String, #[source] walkdir::Error),
}

/// A markdown note found on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkedFile {
    pub absolute_path: PathBuf,
    /// Vault-relative path with `/` separators.
    pub vault_path: String,
}

/// Finds markdown notes, skipping hidden and excluded folders.
#[derive(Debug, Clone)]
pub struct VaultWalker {
    root: PathBuf,
    excluded_folders: Vec<PathBuf>,
}

impl VaultWalker {
    pub fn new(root: &Path) -> Result<Self, VaultWalkerError> {
        Self::with_exclusions(root, Vec::new())
    }

    /// Walker that also skips `excluded_folders`, given relative to the
    /// root or as absolute paths inside it.
    pub fn with_exclusions(
        root: &Path,
        excluded_folders: Vec<PathBuf>,
    ) -> Result<Self, VaultWalkerError> {
        let given = root;
        let root = given
            .canonicalize()
            .map_err(|_| VaultWalkerError::MissingRoot(given.display().to_string()))?;

        let excluded_folders = excluded_folders
            .into_iter()
            .map(|p| {
                let relative = p.strip_prefix(&root).or_else(|_| p.strip_prefix(given));
                match relative {
                    Ok(rel) => rel.to_path_buf(),
                    Err(_) => p.clone(),
                }
            })
            .collect();

        Ok(Self { root, excluded_folders })
    }

    /// All markdown notes, sorted by vault path.
    pub fn walk(&self) -> Result<Vec<WalkedFile>, VaultWalkerError> {
        let mut files = Vec::new();

        let entries = WalkDir::new(&self.root)
            .follow_links(false)
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !self.is_skipped(e.path()));

        for entry in entries {
            let entry = entry
                .map_err(|e| VaultWalkerError::WalkError(self.root.display().to_string(), e))?;
            let path = entry.path();
            if !entry.file_type().is_file() || !is_markdown_file(path) {
                continue;
            }

            if let Ok(relative) = path.strip_prefix(&self.root) {
                files.push(WalkedFile {
                    absolute_path: path.to_path_buf(),
                    vault_path: to_vault_path(relative),
                });
            }
        }

        files.sort_by(|a, b| a.vault_path.cmp(&b.vault_path));
        Ok(files)
    }

    fn is_skipped(&self, path: &Path) -> bool {
        let hidden = path
            .file_name()
            .is_some_and(|name| name.to_string_lossy().starts_with('.'));
        if hidden {
            return true;
        }

        path.strip_prefix(&self.root)
            .is_ok_and(|rel| self.excluded_folders.iter().any(|ex| rel.starts_with(ex)))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

/// Join path components with `/` regardless of platform.
pub fn to_vault_path(relative: &Path) -> String {
    relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

fn is_markdown_file(path: &Path) -> bool {
    path.extension().is_some_and(|e| e == "md")
}
