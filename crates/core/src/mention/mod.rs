//! `@` mention suggestions: candidate building, selection and the popup
//! adapter that ties the trigger machine to the ranker.

mod candidates;
mod popup;
mod select;

pub use candidates::{DEFAULT_PERSON_TAG, build_candidates, daily_candidates};
pub use popup::{Replacement, SelectionDirection, SuggestionPopup};
pub use select::{SelectError, select_suggestion};
