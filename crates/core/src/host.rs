//! Host service interfaces.
//!
//! The core never owns the document, the vault, or persisted settings. Every
//! host service it needs is described here as a trait and passed in
//! explicitly by the caller. The `vault` and `markdown` modules provide the
//! filesystem-backed reference implementations.

use std::fmt::Write;

use chrono::NaiveDate;
use thiserror::Error;

use crate::frontmatter::Frontmatter;
use crate::settings::{Settings, SettingsError};

/// Errors reported by host services.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("daily note already exists: {0}")]
    DailyNoteExists(String),

    #[error("failed to read {0}: {1}")]
    Read(String, #[source] std::io::Error),

    #[error("failed to write {0}: {1}")]
    Write(String, #[source] std::io::Error),

    #[error("failed to index vault: {0}")]
    Index(String),

    #[error("invalid daily note format: {0}")]
    BadDateFormat(String),

    #[error(transparent)]
    Settings(#[from] SettingsError),
}

pub type HostResult<T> = Result<T, HostError>;

/// A cursor position: zero-based line and zero-based character column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
    pub line: usize,
    pub ch: usize,
}

impl Position {
    pub fn new(line: usize, ch: usize) -> Self {
        Self { line, ch }
    }
}

/// Read/write access to the editor document.
pub trait EditorBuffer {
    /// Text of a single line without its terminator.
    fn line(&self, row: usize) -> Option<&str>;

    /// Text between two positions on the same or different lines.
    fn get_range(&self, from: Position, to: Position) -> String;

    /// Replace the text between two positions.
    fn replace_range(&mut self, text: &str, from: Position, to: Position);

    /// The character immediately before `pos`.
    ///
    /// A position at the start of any line after the first reads as `'\n'`.
    fn char_before(&self, pos: Position) -> Option<char> {
        if pos.ch == 0 {
            return (pos.line > 0).then_some('\n');
        }
        self.line(pos.line)?.chars().nth(pos.ch - 1)
    }
}

/// Syntax query over the current document.
pub trait CodeRegions {
    /// Whether `pos` falls inside inline code or a code block.
    fn is_in_code(&self, pos: Position) -> bool;
}

/// A note in the vault, addressed by its vault-relative path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteRef {
    /// Vault-relative path including the `.md` extension.
    pub path: String,
    /// File name without extension.
    pub basename: String,
}

impl NoteRef {
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        let basename = basename_of(&path);
        Self { path, basename }
    }
}

/// A note together with its parsed frontmatter.
#[derive(Debug, Clone)]
pub struct NoteEntry {
    pub note: NoteRef,
    pub frontmatter: Option<Frontmatter>,
}

/// Enumerates the notes of the vault.
pub trait NoteIndex {
    /// All markdown notes, sorted by path.
    fn notes(&self) -> HostResult<Vec<NoteEntry>>;

    /// Look up a note by its vault-relative path.
    fn resolve(&self, path: &str) -> Option<NoteRef>;
}

/// Configured location and naming of daily notes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyNoteSettings {
    /// Vault-relative folder, empty for the vault root.
    pub folder: String,
    /// chrono `strftime` format of the file name.
    pub format: String,
}

impl Default for DailyNoteSettings {
    fn default() -> Self {
        Self { folder: String::new(), format: "%Y-%m-%d".to_string() }
    }
}

/// The host's daily-note service.
pub trait DailyNotes {
    /// Whether the daily-notes feature is enabled in the host.
    fn is_available(&self) -> bool;

    fn settings(&self) -> DailyNoteSettings;

    /// Existing daily note for `date`, if any.
    fn find(&self, date: NaiveDate) -> HostResult<Option<NoteRef>>;

    /// Create the daily note for `date` and return it.
    fn create(&mut self, date: NaiveDate) -> HostResult<NoteRef>;

    /// File name (without extension) of the daily note for `date`.
    fn note_name(&self, date: NaiveDate) -> HostResult<String> {
        let format = self.settings().format;
        let mut name = String::new();
        write!(name, "{}", date.format(&format))
            .map_err(|_| HostError::BadDateFormat(format.clone()))?;
        Ok(name.strip_suffix(".md").map(str::to_string).unwrap_or(name))
    }

    /// Vault-relative path the daily note for `date` would be created at.
    fn planned_path(&self, date: NaiveDate) -> HostResult<String> {
        let folder = self.settings().folder;
        let file = format!("{}.md", self.note_name(date)?);
        Ok(join_vault_path(&folder, &file))
    }
}

/// Produces the host's native link markup.
pub trait LinkFormatter {
    fn format_link(&self, target: &NoteRef, source_path: &str, alias: Option<&str>)
    -> String;
}

/// Persists the extension's settings.
pub trait SettingsStore {
    fn load(&self) -> HostResult<Settings>;

    fn save(&self, settings: &Settings) -> HostResult<()>;
}

/// Join a vault-relative folder and file name with `/`, normalising slashes.
pub fn join_vault_path(folder: &str, file: &str) -> String {
    let folder = folder.trim_matches('/');
    if folder.is_empty() {
        file.to_string()
    } else {
        format!("{folder}/{file}")
    }
}

fn basename_of(path: &str) -> String {
    let file = path.rsplit('/').next().unwrap_or(path);
    file.strip_suffix(".md").unwrap_or(file).to_string()
}
