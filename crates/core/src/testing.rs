//! In-memory host services for unit tests.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::frontmatter::Frontmatter;
use crate::host::{
    DailyNoteSettings, DailyNotes, HostError, HostResult, LinkFormatter, NoteEntry, NoteIndex,
    NoteRef,
};

#[derive(Debug, Default)]
pub struct MemoryIndex {
    entries: Vec<NoteEntry>,
}

impl MemoryIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_note(mut self, path: &str, frontmatter: Option<&str>) -> Self {
        let frontmatter =
            frontmatter.map(|yaml| serde_yaml::from_str::<Frontmatter>(yaml).unwrap());
        self.entries.push(NoteEntry { note: NoteRef::new(path), frontmatter });
        self.entries.sort_by(|a, b| a.note.path.cmp(&b.note.path));
        self
    }
}

impl NoteIndex for MemoryIndex {
    fn notes(&self) -> HostResult<Vec<NoteEntry>> {
        Ok(self.entries.clone())
    }

    fn resolve(&self, path: &str) -> Option<NoteRef> {
        self.entries.iter().find(|e| e.note.path == path).map(|e| e.note.clone())
    }
}

#[derive(Debug)]
pub struct MemoryDailyNotes {
    pub available: bool,
    pub fail_create: bool,
    settings: DailyNoteSettings,
    pub notes: BTreeMap<NaiveDate, NoteRef>,
    pub created: Vec<NaiveDate>,
}

impl MemoryDailyNotes {
    pub fn new(folder: &str, format: &str) -> Self {
        Self {
            available: true,
            fail_create: false,
            settings: DailyNoteSettings { folder: folder.to_string(), format: format.to_string() },
            notes: BTreeMap::new(),
            created: Vec::new(),
        }
    }

    pub fn add_existing(&mut self, date: NaiveDate, path: &str) {
        self.notes.insert(date, NoteRef::new(path));
    }
}

impl DailyNotes for MemoryDailyNotes {
    fn is_available(&self) -> bool {
        self.available
    }

    fn settings(&self) -> DailyNoteSettings {
        self.settings.clone()
    }

    fn find(&self, date: NaiveDate) -> HostResult<Option<NoteRef>> {
        Ok(self.notes.get(&date).cloned())
    }

    fn create(&mut self, date: NaiveDate) -> HostResult<NoteRef> {
        let path = self.planned_path(date)?;
        if self.fail_create {
            return Err(HostError::Write(
                path,
                std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
            ));
        }
        if self.notes.contains_key(&date) {
            return Err(HostError::DailyNoteExists(path));
        }
        let note = NoteRef::new(path);
        self.notes.insert(date, note.clone());
        self.created.push(date);
        Ok(note)
    }
}

/// Renders `[[basename|alias]]`.
pub struct WikiLinks;

impl LinkFormatter for WikiLinks {
    fn format_link(&self, target: &NoteRef, _source_path: &str, alias: Option<&str>) -> String {
        match alias {
            Some(alias) => format!("[[{}|{}]]", target.basename, alias),
            None => format!("[[{}]]", target.basename),
        }
    }
}
