use serde::Serialize;

use crate::host::Position;

/// The character that opens the mention popup.
pub const TRIGGER_CHAR: char = '@';

/// Maximum number of spaces a query may contain before the mention is
/// considered abandoned.
pub const MAX_QUERY_SPACES: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TriggerState {
    #[default]
    Closed,
    Open,
}

/// The active mention span.
///
/// `anchor` is the position of the trigger character and `current_end` the
/// cursor. Both are always on the same line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriggerSpan {
    pub anchor: Position,
    pub current_end: Position,
}

impl TriggerSpan {
    /// Start of the query text, just after the trigger character.
    pub fn query_from(&self) -> Position {
        Position::new(self.anchor.line, self.anchor.ch + 1)
    }
}

/// What the popup should show for the current keystroke.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TriggerInfo {
    /// Position of the trigger character; replacing up to `query_end`
    /// replaces the whole mention.
    #[serde(skip)]
    pub query_start: Position,
    #[serde(skip)]
    pub query_end: Position,
    pub query: String,
}
