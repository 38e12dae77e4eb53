//! Shared output formatting for query commands.

use daylink_core::DateOption;
use daylink_core::rank::Suggestion;
use serde::Serialize;
use tabled::{Table, Tabled, settings::Style};

#[derive(Tabled)]
struct DateRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Label")]
    label: String,
    #[tabled(rename = "Date")]
    date: String,
}

#[derive(Tabled)]
struct SuggestionRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Alias")]
    alias: String,
    #[tabled(rename = "Path")]
    path: String,
    #[tabled(rename = "Score")]
    score: u32,
}

/// Print date options as a table.
pub fn print_dates_table(options: &[DateOption]) {
    if options.is_empty() {
        println!("(no matching dates)");
        return;
    }

    let rows: Vec<DateRow> = options
        .iter()
        .enumerate()
        .map(|(i, opt)| DateRow { index: i + 1, label: opt.label.clone(), date: opt.iso_date() })
        .collect();
    println!("{}", Table::new(rows).with(Style::rounded()));
}

/// Print ranked mention suggestions as a table.
pub fn print_suggestions_table(suggestions: &[Suggestion]) {
    if suggestions.is_empty() {
        println!("(no suggestions)");
        return;
    }

    let rows: Vec<SuggestionRow> = suggestions
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let c = &s.candidate;
            SuggestionRow {
                index: i + 1,
                name: c.display_name.clone(),
                alias: c.alias.clone().unwrap_or_default(),
                path: if c.is_create_new { "(new daily note)".to_string() } else { c.path.clone() },
                score: s.score,
            }
        })
        .collect();
    println!("{}", Table::new(rows).with(Style::rounded()));
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}
