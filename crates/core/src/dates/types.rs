//! Date option types.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a week-start value is not recognised.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid start of week: {0} (expected 0/sunday or 1/monday)")]
pub struct WeekStartError(pub String);

/// First day of the week.
///
/// Persisted as `"0"` (Sunday) or `"1"` (Monday).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum WeekStart {
    Sunday,
    #[default]
    Monday,
}

impl WeekStart {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeekStart::Sunday => "0",
            WeekStart::Monday => "1",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            WeekStart::Sunday => "Sunday",
            WeekStart::Monday => "Monday",
        }
    }

    fn weekday(&self) -> Weekday {
        match self {
            WeekStart::Sunday => Weekday::Sun,
            WeekStart::Monday => Weekday::Mon,
        }
    }

    /// First day of the week containing `date`.
    pub fn start_of_week(&self, date: NaiveDate) -> NaiveDate {
        let back = (date.weekday().num_days_from_monday() as i64
            - self.weekday().num_days_from_monday() as i64
            + 7)
            % 7;
        date - Duration::days(back)
    }
}

impl FromStr for WeekStart {
    type Err = WeekStartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "0" | "sun" | "sunday" => Ok(WeekStart::Sunday),
            "1" | "mon" | "monday" => Ok(WeekStart::Monday),
            _ => Err(WeekStartError(s.to_string())),
        }
    }
}

impl TryFrom<String> for WeekStart {
    type Error = WeekStartError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<WeekStart> for String {
    fn from(value: WeekStart) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for WeekStart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A labelled calendar day offered in the jump-to-date menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateOption {
    pub label: String,
    pub date: NaiveDate,
}

impl DateOption {
    pub fn new(label: impl Into<String>, date: NaiveDate) -> Self {
        Self { label: label.into(), date }
    }

    /// The date as `YYYY-MM-DD`.
    pub fn iso_date(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// Text matched against when filtering: `"<label> <YYYY-MM-DD>"`.
    pub fn search_text(&self) -> String {
        format!("{} {}", self.label, self.iso_date())
    }
}

impl fmt::Display for DateOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.label, self.iso_date())
    }
}
