use chrono::NaiveDate;
use tracing::debug;

use crate::dates::parse_natural_date;
use crate::host::{DailyNotes, HostResult, NoteIndex};
use crate::rank::Candidate;

/// Frontmatter tag marking a note as a person.
pub const DEFAULT_PERSON_TAG: &str = "person";

/// Build the mention candidates for `query`.
///
/// Daily-note options for a query that parses as a date come first, then
/// every note tagged with `person_tag`, in index order.
pub fn build_candidates<I, D>(
    index: &I,
    daily: &D,
    query: &str,
    today: NaiveDate,
    person_tag: &str,
) -> HostResult<Vec<Candidate>>
where
    I: NoteIndex + ?Sized,
    D: DailyNotes + ?Sized,
{
    let mut candidates = daily_candidates(daily, query, today)?;

    for entry in index.notes()? {
        let Some(frontmatter) = &entry.frontmatter else {
            continue;
        };
        if !frontmatter.has_tag(person_tag) {
            continue;
        }

        let mut candidate = Candidate::note(&entry.note.basename, &entry.note.path);
        candidate.alias = frontmatter.alias();
        candidates.push(candidate);
    }

    Ok(candidates)
}

/// Daily-note options for a query that parses as a date.
///
/// When the note name differs from the query an option aliased with the
/// name is offered, followed by one aliased with the capitalised query.
/// Both keep the raw query as their auxiliary value.
pub fn daily_candidates<D>(daily: &D, query: &str, today: NaiveDate) -> HostResult<Vec<Candidate>>
where
    D: DailyNotes + ?Sized,
{
    if !daily.is_available() {
        return Ok(Vec::new());
    }
    let Some(date) = parse_natural_date(query, today) else {
        return Ok(Vec::new());
    };

    let name = daily.note_name(date)?;
    let (path, is_create_new) = match daily.find(date)? {
        Some(note) => (note.path, false),
        None => (daily.planned_path(date)?, true),
    };
    debug!(query, %date, %path, is_create_new, "date mention");

    let option = |alias: String| Candidate {
        display_name: name.clone(),
        path: path.clone(),
        alias: Some(alias),
        auxiliary_value: Some(query.to_string()),
        is_create_new,
        resolved_date: Some(date),
    };

    let mut options = Vec::with_capacity(2);
    if name != query {
        options.push(option(name.clone()));
    }
    options.push(option(upper_case_first(query)));
    Ok(options)
}

fn upper_case_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
