use chrono::NaiveDate;
use tracing::debug;

use super::candidates::{DEFAULT_PERSON_TAG, build_candidates};
use super::select::{SelectError, select_suggestion};
use crate::host::{
    CodeRegions, DailyNotes, EditorBuffer, HostResult, LinkFormatter, NoteIndex, Position,
};
use crate::rank::{Suggestion, rank};
use crate::trigger::{TriggerInfo, TriggerMachine};

/// Direction of a keyboard selection move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionDirection {
    Next = 1,
    Previous = -1,
    None = 0,
}

/// Text to insert in place of the typed mention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    pub from: Position,
    pub to: Position,
    pub text: String,
}

impl Replacement {
    /// Apply to `buffer` and return the cursor after the inserted text.
    pub fn apply<B: EditorBuffer + ?Sized>(&self, buffer: &mut B) -> Position {
        buffer.replace_range(&self.text, self.from, self.to);
        Position::new(self.from.line, self.from.ch + self.text.chars().count())
    }
}

/// State of the mention popup between editor events.
///
/// Owns the trigger machine, the current suggestions and the selection.
/// The host only renders [`SuggestionPopup::suggestions`].
#[derive(Debug, Clone)]
pub struct SuggestionPopup {
    machine: TriggerMachine,
    context: Option<TriggerInfo>,
    suggestions: Vec<Suggestion>,
    selected_index: usize,
    is_open: bool,
    focused: bool,
    person_tag: String,
}

impl Default for SuggestionPopup {
    fn default() -> Self {
        Self::new(DEFAULT_PERSON_TAG)
    }
}

impl SuggestionPopup {
    pub fn new(person_tag: impl Into<String>) -> Self {
        Self {
            machine: TriggerMachine::new(),
            context: None,
            suggestions: Vec::new(),
            selected_index: 0,
            is_open: false,
            focused: false,
            person_tag: person_tag.into(),
        }
    }

    /// Handle a text change with the cursor at `cursor`.
    ///
    /// Returns whether the popup is visible afterwards.
    #[allow(clippy::too_many_arguments)]
    pub fn on_text_change<B, C, I, D>(
        &mut self,
        cursor: Position,
        buffer: &B,
        code: &C,
        index: &I,
        daily: &D,
        today: NaiveDate,
    ) -> HostResult<bool>
    where
        B: EditorBuffer + ?Sized,
        C: CodeRegions + ?Sized,
        I: NoteIndex + ?Sized,
        D: DailyNotes + ?Sized,
    {
        let Some(info) = self.machine.evaluate(cursor, buffer, code) else {
            self.hide();
            return Ok(false);
        };

        let candidates = build_candidates(index, daily, &info.query, today, &self.person_tag)?;
        let suggestions: Vec<Suggestion> =
            rank(&candidates, &info.query).iter().map(|m| m.to_suggestion()).collect();
        debug!(query = %info.query, count = suggestions.len(), "mention suggestions");

        if suggestions.is_empty() {
            self.hide();
            return Ok(false);
        }

        self.context = Some(info);
        self.suggestions = suggestions;
        self.selected_index = 0;
        if !self.is_open {
            self.is_open = true;
            self.focused = true;
        }
        Ok(true)
    }

    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn selected_item(&self) -> Option<&Suggestion> {
        if !self.is_open {
            return None;
        }
        self.suggestions.get(self.selected_index)
    }

    /// The active trigger query, if the popup is open.
    pub fn context(&self) -> Option<&TriggerInfo> {
        self.context.as_ref()
    }

    /// Move the selection, wrapping at both ends.
    ///
    /// An unfocused popup gains focus first and only honours `Previous`.
    pub fn select_next(&mut self, dir: SelectionDirection) {
        if !self.is_open || self.suggestions.is_empty() {
            return;
        }

        let mut dir = dir;
        if !self.focused {
            self.focused = true;
            if dir != SelectionDirection::Previous {
                dir = SelectionDirection::None;
            }
        }

        let len = self.suggestions.len() as isize;
        let next = (self.selected_index as isize + dir as isize).rem_euclid(len);
        self.selected_index = next as usize;
    }

    /// Accept the selected suggestion.
    ///
    /// On success the popup closes and the replacement spanning the whole
    /// mention is returned. On failure the popup is left untouched.
    pub fn accept<I, D, L>(
        &mut self,
        index: &I,
        daily: &mut D,
        linker: &L,
        source_path: &str,
    ) -> Result<Option<Replacement>, SelectError>
    where
        I: NoteIndex + ?Sized,
        D: DailyNotes + ?Sized,
        L: LinkFormatter + ?Sized,
    {
        let (Some(context), Some(selected)) = (&self.context, self.selected_item()) else {
            return Ok(None);
        };

        let text = select_suggestion(&selected.candidate, index, daily, linker, source_path)?;
        let replacement = Replacement { from: context.query_start, to: context.query_end, text };

        self.close();
        Ok(Some(replacement))
    }

    pub fn is_visible(&self) -> bool {
        self.is_open
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Drop keyboard focus while staying visible.
    pub fn blur(&mut self) {
        self.focused = false;
    }

    /// Dismiss the popup and reset the trigger.
    pub fn close(&mut self) {
        self.machine.close();
        self.hide();
    }

    fn hide(&mut self) {
        self.context = None;
        self.suggestions.clear();
        self.selected_index = 0;
        self.is_open = false;
        self.focused = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markdown::TextBuffer;
    use crate::testing::{MemoryDailyNotes, MemoryIndex, WikiLinks};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 14).unwrap()
    }

    fn index() -> MemoryIndex {
        MemoryIndex::new()
            .with_note("People/Alice.md", Some("tags: [person]"))
            .with_note("People/Bob.md", Some("tags: [person]"))
            .with_note("People/Bobby Tables.md", Some("tags: [person]"))
    }

    struct Session {
        popup: SuggestionPopup,
        buf: TextBuffer,
        index: MemoryIndex,
        daily: MemoryDailyNotes,
    }

    impl Session {
        fn new(text: &str) -> Self {
            Self {
                popup: SuggestionPopup::default(),
                buf: TextBuffer::new(text),
                index: index(),
                daily: MemoryDailyNotes::new("Daily", "%Y-%m-%d"),
            }
        }

        fn type_str(&mut self, s: &str) -> bool {
            let mut visible = false;
            for c in s.chars() {
                let cursor = self.buf.insert_at_end(c);
                visible = self
                    .popup
                    .on_text_change(cursor, &self.buf, &self.buf, &self.index, &self.daily, today())
                    .unwrap();
            }
            visible
        }
    }

    #[test]
    fn opens_after_query_typed() {
        let mut s = Session::new("Hi ");
        assert!(!s.type_str("@"));
        assert!(s.type_str("bo"));
        assert!(s.popup.is_visible());
        assert!(s.popup.is_focused());

        let names: Vec<&str> =
            s.popup.suggestions().iter().map(|x| x.candidate.display_name.as_str()).collect();
        assert_eq!(names, vec!["Bob", "Bobby Tables"]);
    }

    #[test]
    fn hides_when_nothing_matches() {
        let mut s = Session::new("");
        assert!(!s.type_str("@zzz"));
        assert!(!s.popup.is_visible());
        assert!(s.popup.selected_item().is_none());
    }

    #[test]
    fn selection_wraps() {
        let mut s = Session::new("");
        s.type_str("@b");
        assert_eq!(s.popup.suggestions().len(), 2);

        s.popup.select_next(SelectionDirection::Next);
        assert_eq!(s.popup.selected_index(), 1);
        s.popup.select_next(SelectionDirection::Next);
        assert_eq!(s.popup.selected_index(), 0);
        s.popup.select_next(SelectionDirection::Previous);
        assert_eq!(s.popup.selected_index(), 1);
    }

    #[test]
    fn unfocused_popup_only_honours_previous() {
        let mut s = Session::new("");
        s.type_str("@b");

        s.popup.blur();
        s.popup.select_next(SelectionDirection::Next);
        assert!(s.popup.is_focused());
        assert_eq!(s.popup.selected_index(), 0);

        s.popup.blur();
        s.popup.select_next(SelectionDirection::Previous);
        assert_eq!(s.popup.selected_index(), 1);
    }

    #[test]
    fn accept_replaces_whole_mention() {
        let mut s = Session::new("Meet ");
        s.type_str("@bob");

        let replacement =
            s.popup.accept(&s.index, &mut s.daily, &WikiLinks, "Inbox.md").unwrap().unwrap();
        assert_eq!(replacement.from, Position::new(0, 5));
        assert_eq!(replacement.to, Position::new(0, 9));

        let cursor = replacement.apply(&mut s.buf);
        assert_eq!(s.buf.text(), "Meet [[Bob]] ");
        assert_eq!(cursor, Position::new(0, 13));
        assert!(!s.popup.is_visible());
        assert!(!s.popup.is_focused());
    }

    #[test]
    fn accept_creates_daily_note() {
        let mut s = Session::new("Due ");
        s.type_str("@tomorrow");
        let first = &s.popup.suggestions()[0].candidate;
        assert!(first.is_create_new);

        let replacement =
            s.popup.accept(&s.index, &mut s.daily, &WikiLinks, "Inbox.md").unwrap().unwrap();
        assert!(replacement.text.starts_with("[[2024-03-15"));
        assert_eq!(s.daily.created.len(), 1);
    }

    #[test]
    fn accept_failure_keeps_popup_open() {
        let mut s = Session::new("");
        s.type_str("@tomorrow");
        s.daily.fail_create = true;

        assert!(s.popup.accept(&s.index, &mut s.daily, &WikiLinks, "x.md").is_err());
        assert!(s.popup.is_visible());
    }

    #[test]
    fn accept_when_closed_is_noop() {
        let mut s = Session::new("");
        assert_eq!(s.popup.accept(&s.index, &mut s.daily, &WikiLinks, "x.md").unwrap(), None);
    }

    #[test]
    fn close_resets_everything() {
        let mut s = Session::new("");
        s.type_str("@b");
        s.popup.select_next(SelectionDirection::Next);

        s.popup.close();
        assert!(!s.popup.is_visible());
        assert_eq!(s.popup.selected_index(), 0);
        assert!(s.popup.context().is_none());
        assert!(!s.type_str("o"));
    }
}
