//! Jump-to-date menu options.

use chrono::{Duration, Local, NaiveDate};
use tracing::debug;

use super::natural::parse_natural_date;
use super::types::{DateOption, WeekStart};

/// The fixed relative-date menu for `today`.
///
/// Order: Tomorrow, Next week, Yesterday, Today, then the next six days
/// labelled by weekday name.
pub fn default_options(week_start: WeekStart, today: NaiveDate) -> Vec<DateOption> {
    let mut options = vec![
        DateOption::new("Tomorrow", today + Duration::days(1)),
        DateOption::new("Next week", week_start.start_of_week(today + Duration::days(7))),
        DateOption::new("Yesterday", today - Duration::days(1)),
        DateOption::new("Today", today),
    ];

    for offset in 1..7 {
        let date = today + Duration::days(offset);
        options.push(DateOption::new(weekday_label(date), date));
    }

    options
}

/// [`default_options`] for the local calendar day.
pub fn default_options_now(week_start: WeekStart) -> Vec<DateOption> {
    default_options(week_start, Local::now().date_naive())
}

/// Parse free text into a single option labelled by its weekday name.
pub fn parse_free_text(query: &str, today: NaiveDate) -> Option<DateOption> {
    let date = parse_natural_date(query, today)?;
    Some(DateOption::new(weekday_label(date), date))
}

/// [`parse_free_text`] relative to the local calendar day.
pub fn parse_free_text_now(query: &str) -> Option<DateOption> {
    parse_free_text(query, Local::now().date_naive())
}

/// Keep the options whose `"<label> <YYYY-MM-DD>"` contains `query`,
/// ignoring case.
pub fn filter_options(options: &[DateOption], query: &str) -> Vec<DateOption> {
    let needle = query.to_lowercase();
    options
        .iter()
        .filter(|opt| opt.search_text().to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Options offered for a typed query.
///
/// An empty query lists the defaults. Otherwise a parsable date yields one
/// option and anything else filters the defaults.
pub fn date_suggestions(
    query: &str,
    week_start: WeekStart,
    today: NaiveDate,
) -> Vec<DateOption> {
    let defaults = default_options(week_start, today);
    if query.trim().is_empty() {
        return defaults;
    }

    if let Some(option) = parse_free_text(query, today) {
        debug!(query, date = %option.date, "parsed free-text date");
        return vec![option];
    }

    filter_options(&defaults, query)
}

fn weekday_label(date: NaiveDate) -> String {
    date.format("%A").to_string()
}
