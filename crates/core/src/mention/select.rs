use thiserror::Error;
use tracing::info;

use crate::host::{DailyNotes, HostError, LinkFormatter, NoteIndex};
use crate::rank::Candidate;

#[derive(Debug, Error)]
pub enum SelectError {
    #[error("daily note option for '{0}' has no date")]
    MissingDate(String),

    #[error("note not found: {0}")]
    NoteNotFound(String),

    #[error(transparent)]
    Host(#[from] HostError),
}

/// Produce the text inserted for a selected candidate.
///
/// A create-new daily-note candidate has its note created first. The link
/// is rendered by the host's formatter with the candidate's alias, stripped
/// of newlines and followed by a single space.
pub fn select_suggestion<I, D, L>(
    candidate: &Candidate,
    index: &I,
    daily: &mut D,
    linker: &L,
    source_path: &str,
) -> Result<String, SelectError>
where
    I: NoteIndex + ?Sized,
    D: DailyNotes + ?Sized,
    L: LinkFormatter + ?Sized,
{
    let target = if candidate.is_create_new {
        let date = candidate
            .resolved_date
            .ok_or_else(|| SelectError::MissingDate(candidate.display_name.clone()))?;
        match daily.find(date)? {
            Some(note) => note,
            None => {
                let note = daily.create(date)?;
                info!(path = %note.path, "created daily note");
                note
            }
        }
    } else {
        index
            .resolve(&candidate.path)
            .ok_or_else(|| SelectError::NoteNotFound(candidate.path.clone()))?
    };

    let alias = candidate.alias.as_deref().filter(|a| !a.is_empty());
    let mut link = linker.format_link(&target, source_path, alias).replace('\n', "");
    link.push(' ');
    Ok(link)
}
