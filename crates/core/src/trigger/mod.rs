//! `@` mention trigger detection.
//!
//! [`TriggerMachine::evaluate`] runs once per text-change event and decides
//! whether the mention popup is open and what the current query is.

mod types;

pub use types::{MAX_QUERY_SPACES, TRIGGER_CHAR, TriggerInfo, TriggerSpan, TriggerState};

use tracing::debug;

use crate::host::{CodeRegions, EditorBuffer, Position};

/// Tracks the open/closed mention span across keystrokes.
#[derive(Debug, Clone, Default)]
pub struct TriggerMachine {
    span: Option<TriggerSpan>,
}

impl TriggerMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> TriggerState {
        if self.span.is_some() { TriggerState::Open } else { TriggerState::Closed }
    }

    pub fn span(&self) -> Option<&TriggerSpan> {
        self.span.as_ref()
    }

    /// Force the machine closed, e.g. after a suggestion was selected.
    pub fn close(&mut self) {
        if self.span.take().is_some() {
            debug!("mention trigger closed");
        }
    }

    /// Evaluate the buffer after a text change with the cursor at `cursor`.
    ///
    /// Returns the query to show suggestions for, or `None` when no popup
    /// should be displayed.
    pub fn evaluate<B, C>(&mut self, cursor: Position, buffer: &B, code: &C) -> Option<TriggerInfo>
    where
        B: EditorBuffer + ?Sized,
        C: CodeRegions + ?Sized,
    {
        let typed = buffer.char_before(cursor);

        if let Some(span) = self.span
            && (matches!(typed, Some('\n' | '\t')) || cursor.line != span.anchor.line)
        {
            self.close();
            return None;
        }

        // Code only blocks opening; an open mention may contain backticks.
        if self.span.is_none() && code.is_in_code(cursor) {
            return None;
        }

        if typed == Some(TRIGGER_CHAR) {
            let anchor = Position::new(cursor.line, cursor.ch.saturating_sub(1));
            debug!(line = anchor.line, ch = anchor.ch, "mention trigger opened");
            self.span = Some(TriggerSpan { anchor, current_end: cursor });
            return None;
        }

        let span = self.span.as_mut()?;
        if cursor.ch <= span.anchor.ch {
            self.close();
            return None;
        }

        let query = buffer.get_range(span.query_from(), cursor);
        let spaces = query.chars().filter(|c| *c == ' ').count();
        if query.is_empty() || query.starts_with(' ') || spaces > MAX_QUERY_SPACES {
            self.close();
            return None;
        }

        span.current_end = cursor;
        Some(TriggerInfo { query_start: span.anchor, query_end: cursor, query })
    }
}
