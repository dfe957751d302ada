/// CompletedDate entity and date parsing
///
/// A CompletedDate marks that a given habit was completed on a specific
/// calendar date. Records are only ever created or removed by the toggle
/// operation, never edited in place.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::{CompletionId, DomainError, HabitId};

/// A record marking that a habit was completed on a specific calendar date
///
/// The date carries no time-of-day. At most one record exists per
/// (habit, date) pair; the storage layer enforces this with a unique index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletedDate {
    /// Unique identifier for this completion record
    pub id: CompletionId,
    /// The calendar date the habit was completed on
    pub date: NaiveDate,
    /// The habit this completion belongs to
    pub habit_id: HabitId,
}

impl CompletedDate {
    /// Create a new completion record for a habit and date
    pub fn new(habit_id: HabitId, date: NaiveDate) -> Self {
        Self {
            id: CompletionId::new(),
            date,
            habit_id,
        }
    }

    /// Create a completion record from existing data (used when loading
    /// from the database)
    pub fn from_existing(id: CompletionId, date: NaiveDate, habit_id: HabitId) -> Self {
        Self { id, date, habit_id }
    }
}

/// Parse a client-supplied date string into a calendar date
///
/// Accepts `YYYY-MM-DD` directly. An RFC 3339 timestamp is also accepted,
/// in which case only its calendar-date component is used, so a client
/// sending `2024-01-01T08:30:00Z` toggles the same record as one sending
/// `2024-01-01`.
pub fn parse_completion_date(input: &str) -> Result<NaiveDate, DomainError> {
    let trimmed = input.trim();

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }

    if let Ok(datetime) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(datetime.date_naive());
    }

    Err(DomainError::InvalidDate(format!(
        "Expected YYYY-MM-DD or an RFC 3339 timestamp, got '{}'",
        input
    )))
}
