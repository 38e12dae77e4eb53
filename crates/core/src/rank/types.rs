//! Ranking data types.

use std::ops::Range;

use chrono::NaiveDate;
use serde::Serialize;

/// One linkable target offered by the mention popup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    /// File name without extension.
    pub display_name: String,
    /// Vault-relative path; empty when the note does not exist yet.
    pub path: String,
    pub alias: Option<String>,
    /// Extra text used only for matching, e.g. the raw date query.
    pub auxiliary_value: Option<String>,
    pub is_create_new: bool,
    pub resolved_date: Option<NaiveDate>,
}

impl Candidate {
    /// A candidate for an existing note.
    pub fn note(display_name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            path: path.into(),
            alias: None,
            auxiliary_value: None,
            is_create_new: false,
            resolved_date: None,
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Text shown to the user: the alias when present, else the name.
    pub fn label(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.display_name)
    }

    /// Fields in matching order, skipping absent ones.
    pub(crate) fn fields(&self) -> impl Iterator<Item = (MatchField, &str)> {
        [
            (MatchField::Alias, self.alias.as_deref()),
            (MatchField::DisplayName, Some(self.display_name.as_str())),
            (MatchField::Auxiliary, self.auxiliary_value.as_deref()),
        ]
        .into_iter()
        .filter_map(|(field, text)| text.map(|t| (field, t)))
    }
}

/// A candidate field the query can match against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchField {
    Alias,
    DisplayName,
    Auxiliary,
}

/// Matched character ranges within one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldHighlight {
    pub field: MatchField,
    /// Half-open ranges of character (not byte) indices.
    pub ranges: Vec<Range<usize>>,
}

/// A ranked reference into the candidate slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedMatch<'a> {
    pub candidate: &'a Candidate,
    /// Index of the candidate in the input slice.
    pub position: usize,
    pub score: u32,
    pub highlights: Vec<FieldHighlight>,
}

impl RankedMatch<'_> {
    pub fn to_suggestion(&self) -> Suggestion {
        Suggestion {
            candidate: self.candidate.clone(),
            score: self.score,
            highlights: self.highlights.clone(),
        }
    }
}

/// Owned form of a [`RankedMatch`], kept between editor events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub candidate: Candidate,
    pub score: u32,
    pub highlights: Vec<FieldHighlight>,
}

impl From<RankedMatch<'_>> for Suggestion {
    fn from(m: RankedMatch<'_>) -> Self {
        m.to_suggestion()
    }
}
