/// Toggling per-date completion records
///
/// Toggling adds a completion record for the given date if none exists,
/// or removes the existing one. The delete-or-insert itself runs inside a
/// storage transaction; this layer only validates the input.

use serde::Deserialize;

use crate::domain::{parse_completion_date, Habit};
use crate::service::{parse_habit_id, ServiceError};
use crate::storage::HabitStorage;

/// Request body for toggling a completion
#[derive(Debug, Deserialize)]
pub struct ToggleCompletionParams {
    pub date: Option<String>,
}

/// Flip the completion state of a habit for one calendar date
///
/// Returns the habit with its updated completion list. Toggling the same
/// date twice in sequence restores the original set.
pub fn toggle_completion<S: HabitStorage>(
    storage: &S,
    habit_id: &str,
    params: ToggleCompletionParams,
) -> Result<Habit, ServiceError> {
    let date_str = params
        .date
        .filter(|d| !d.trim().is_empty())
        .ok_or_else(|| ServiceError::Validation("Date is required".to_string()))?;
    let date = parse_completion_date(&date_str)?;

    let habit_id = parse_habit_id(habit_id)?;
    Ok(storage.toggle_completion(&habit_id, date)?)
}
