//! Date options for the jump-to-date menu.
//!
//! This module provides:
//! - The fixed relative-date menu (tomorrow, next week, yesterday, today, ...)
//! - Natural-language parsing of typed dates ("next friday", "3 days ago")
//! - Substring filtering of the menu when the typed text is not a date

pub mod natural;
pub mod options;
pub mod types;

pub use natural::parse_natural_date;
pub use options::{
    date_suggestions, default_options, default_options_now, filter_options,
    parse_free_text, parse_free_text_now,
};
pub use types::{DateOption, WeekStart, WeekStartError};
