//! Jump to a date's daily note.

use chrono::NaiveDate;
use thiserror::Error;
use tracing::{debug, info};

use crate::host::{DailyNotes, HostError, NoteRef};

#[derive(Debug, Error)]
pub enum GotoError {
    #[error("daily notes are not enabled; enable them to jump to a date")]
    DailyNotesUnavailable,

    #[error(transparent)]
    Host(#[from] HostError),
}

/// Find the daily note for `date`, creating it when missing.
pub fn open_daily_note<D>(daily: &mut D, date: NaiveDate) -> Result<NoteRef, GotoError>
where
    D: DailyNotes + ?Sized,
{
    if !daily.is_available() {
        return Err(GotoError::DailyNotesUnavailable);
    }

    if let Some(note) = daily.find(date)? {
        debug!(%date, path = %note.path, "found daily note");
        return Ok(note);
    }

    let note = daily.create(date)?;
    info!(%date, path = %note.path, "created daily note");
    Ok(note)
}
