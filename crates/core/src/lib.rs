//! Core of the daylink editor extension: `@` mention linking and
//! jump-to-date for daily notes.
//!
//! The host editor is described by the traits in [`host`]; [`vault`] and
//! [`markdown`] implement them over a directory of markdown files.

pub mod config;
pub mod dates;
pub mod frontmatter;
pub mod goto;
pub mod host;
pub mod markdown;
pub mod mention;
pub mod rank;
pub mod settings;
pub mod trigger;
pub mod vault;

#[cfg(test)]
pub(crate) mod testing;

pub use dates::{DateOption, WeekStart, date_suggestions, default_options, parse_free_text};
pub use goto::{GotoError, open_daily_note};
pub use host::{HostError, Position};
pub use mention::{SuggestionPopup, build_candidates, select_suggestion};
pub use rank::{Candidate, RankedMatch, rank};
pub use settings::Settings;
pub use trigger::{TriggerInfo, TriggerMachine, TriggerState};
