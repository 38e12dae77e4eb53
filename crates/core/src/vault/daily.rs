//! Daily notes stored as files under the vault root.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use chrono::format::{Item, StrftimeItems};
use chrono::{Local, NaiveDate};
use regex::Regex;
use tracing::debug;

use crate::host::{DailyNoteSettings, DailyNotes, HostError, HostResult, NoteRef};

static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{\s*(\w+)\s*(?:[:|]\s*([^{}]*?))?\s*\}\}").expect("valid regex"));

/// Filesystem daily-note service.
#[derive(Debug, Clone)]
pub struct FsDailyNotes {
    root: PathBuf,
    settings: DailyNoteSettings,
    template: Option<PathBuf>,
    enabled: bool,
}

impl FsDailyNotes {
    pub fn new(root: impl Into<PathBuf>, settings: DailyNoteSettings) -> Self {
        Self { root: root.into(), settings, template: None, enabled: true }
    }

    /// Use `template` as the initial content of new notes.
    pub fn with_template(mut self, template: Option<PathBuf>) -> Self {
        self.template = template;
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn initial_content(&self, date: NaiveDate, title: &str) -> HostResult<String> {
        let Some(template) = &self.template else {
            return Ok(String::new());
        };
        let raw = fs::read_to_string(template)
            .map_err(|e| HostError::Read(template.display().to_string(), e))?;
        Ok(render_template(&raw, date, title))
    }
}

impl DailyNotes for FsDailyNotes {
    fn is_available(&self) -> bool {
        self.enabled
    }

    fn settings(&self) -> DailyNoteSettings {
        self.settings.clone()
    }

    fn find(&self, date: NaiveDate) -> HostResult<Option<NoteRef>> {
        let path = self.planned_path(date)?;
        Ok(self.root.join(&path).is_file().then(|| NoteRef::new(path)))
    }

    fn create(&mut self, date: NaiveDate) -> HostResult<NoteRef> {
        let path = self.planned_path(date)?;
        let absolute = self.root.join(&path);
        if absolute.exists() {
            return Err(HostError::DailyNoteExists(path));
        }

        let note = NoteRef::new(path);
        let content = self.initial_content(date, &note.basename)?;

        if let Some(parent) = absolute.parent() {
            fs::create_dir_all(parent).map_err(|e| HostError::Write(note.path.clone(), e))?;
        }
        fs::write(&absolute, content).map_err(|e| HostError::Write(note.path.clone(), e))?;
        debug!(path = %note.path, "wrote daily note");

        Ok(note)
    }
}

/// Fill `{{date}}`, `{{date:FORMAT}}`, `{{title}}` and `{{time}}`.
///
/// Unknown placeholders and invalid formats are left untouched.
pub fn render_template(template: &str, date: NaiveDate, title: &str) -> String {
    PLACEHOLDER_RE
        .replace_all(template, |caps: &regex::Captures<'_>| {
            let format = caps.get(2).map(|m| m.as_str()).filter(|f| !f.is_empty());
            match (&caps[1], format) {
                ("date", None) => date.format("%Y-%m-%d").to_string(),
                ("date", Some(fmt)) if is_valid_format(fmt) => date.format(fmt).to_string(),
                ("title", None) => title.to_string(),
                ("time", None) => Local::now().format("%H:%M").to_string(),
                _ => caps[0].to_string(),
            }
        })
        .into_owned()
}

fn is_valid_format(fmt: &str) -> bool {
    !StrftimeItems::new(fmt).any(|item| matches!(item, Item::Error))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn service(dir: &TempDir, folder: &str, format: &str) -> FsDailyNotes {
        FsDailyNotes::new(
            dir.path(),
            DailyNoteSettings { folder: folder.into(), format: format.into() },
        )
    }

    #[test]
    fn create_then_find() {
        let dir = TempDir::new().unwrap();
        let mut daily = service(&dir, "Daily", "%Y-%m-%d");

        assert_eq!(daily.find(ymd(2024, 3, 15)).unwrap(), None);
        let note = daily.create(ymd(2024, 3, 15)).unwrap();
        assert_eq!(note.path, "Daily/2024-03-15.md");
        assert!(dir.path().join("Daily/2024-03-15.md").is_file());
        assert_eq!(daily.find(ymd(2024, 3, 15)).unwrap(), Some(note));
    }

    #[test]
    fn create_refuses_existing() {
        let dir = TempDir::new().unwrap();
        let mut daily = service(&dir, "", "%Y-%m-%d");
        daily.create(ymd(2024, 3, 15)).unwrap();

        let err = daily.create(ymd(2024, 3, 15)).unwrap_err();
        assert!(matches!(err, HostError::DailyNoteExists(p) if p == "2024-03-15.md"));
    }

    #[test]
    fn invalid_format_reports_error_without_writing() {
        let dir = TempDir::new().unwrap();
        let mut daily = service(&dir, "Daily", "%Y-%Q");

        assert!(matches!(daily.find(ymd(2024, 3, 15)), Err(HostError::BadDateFormat(_))));
        assert!(matches!(daily.create(ymd(2024, 3, 15)), Err(HostError::BadDateFormat(_))));
        assert!(!dir.path().join("Daily").exists());
    }

    #[test]
    fn nested_format_creates_folders() {
        let dir = TempDir::new().unwrap();
        let mut daily = service(&dir, "Journal", "%Y/%m/%d %A");

        let note = daily.create(ymd(2024, 3, 15)).unwrap();
        assert_eq!(note.path, "Journal/2024/03/15 Friday.md");
        assert_eq!(note.basename, "15 Friday");
    }

    #[test]
    fn template_placeholders_are_filled() {
        let dir = TempDir::new().unwrap();
        let template = dir.path().join("daily-template.md");
        fs::write(&template, "# {{title}}\nDate: {{date}}\nWeek {{date:%V}} {{other}}\n").unwrap();

        let mut daily = service(&dir, "Daily", "%d.%m.%Y").with_template(Some(template));
        daily.create(ymd(2024, 3, 15)).unwrap();

        let content = fs::read_to_string(dir.path().join("Daily/15.03.2024.md")).unwrap();
        assert_eq!(content, "# 15.03.2024\nDate: 2024-03-15\nWeek 11 {{other}}\n");
    }

    #[test]
    fn missing_template_errors() {
        let dir = TempDir::new().unwrap();
        let mut daily =
            service(&dir, "", "%Y-%m-%d").with_template(Some(dir.path().join("nope.md")));
        assert!(matches!(daily.create(ymd(2024, 3, 15)), Err(HostError::Read(..))));
        assert!(!dir.path().join("2024-03-15.md").exists());
    }

    #[test]
    fn disabled_service_is_unavailable() {
        let dir = TempDir::new().unwrap();
        assert!(!service(&dir, "", "%Y-%m-%d").with_enabled(false).is_available());
    }

    #[test]
    fn render_template_keeps_unknown() {
        let out = render_template("{{ date | %B }} {{title:x}} {{date:%Q}}", ymd(2024, 3, 15), "t");
        assert_eq!(out, "March {{title:x}} {{date:%Q}}");
    }
}
