//! Note index backed by a directory walk.

use std::fs;

use tracing::warn;

use super::walker::VaultWalker;
use crate::frontmatter;
use crate::host::{HostError, HostResult, NoteEntry, NoteIndex, NoteRef};

#[derive(Debug, Clone)]
pub struct FsNoteIndex {
    walker: VaultWalker,
}

impl FsNoteIndex {
    pub fn new(walker: VaultWalker) -> Self {
        Self { walker }
    }
}

impl NoteIndex for FsNoteIndex {
    /// Notes with unreadable files or malformed frontmatter are listed
    /// without frontmatter.
    fn notes(&self) -> HostResult<Vec<NoteEntry>> {
        let files = self.walker.walk().map_err(|e| HostError::Index(e.to_string()))?;

        let entries = files
            .into_iter()
            .map(|file| {
                let frontmatter = match fs::read_to_string(&file.absolute_path) {
                    Ok(content) => match frontmatter::parse(&content) {
                        Ok(doc) => doc.frontmatter,
                        Err(e) => {
                            warn!(path = %file.vault_path, "skipping frontmatter: {e}");
                            None
                        }
                    },
                    Err(e) => {
                        warn!(path = %file.vault_path, "failed to read note: {e}");
                        None
                    }
                };
                NoteEntry { note: NoteRef::new(file.vault_path), frontmatter }
            })
            .collect();

        Ok(entries)
    }

    fn resolve(&self, path: &str) -> Option<NoteRef> {
        let absolute = self.walker.root().join(path);
        (path.ends_with(".md") && absolute.is_file()).then(|| NoteRef::new(path))
    }
}
