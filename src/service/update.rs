/// Renaming existing habits

use serde::Deserialize;

use crate::domain::Habit;
use crate::service::{parse_habit_id, ServiceError};
use crate::storage::HabitStorage;

/// Request body for updating a habit
#[derive(Debug, Deserialize)]
pub struct UpdateHabitParams {
    pub name: Option<String>,
}

/// Rename an existing habit
///
/// Name validation runs before the id is resolved, so a missing name
/// reports as a validation failure even when the id is unknown.
pub fn update_habit<S: HabitStorage>(
    storage: &S,
    habit_id: &str,
    params: UpdateHabitParams,
) -> Result<Habit, ServiceError> {
    let name = params
        .name
        .filter(|n| !n.trim().is_empty())
        .ok_or_else(|| ServiceError::Validation("Habit name is required".to_string()))?;
    Habit::validate_name(&name)?;

    let habit_id = parse_habit_id(habit_id)?;
    storage.rename_habit(&habit_id, &name)?;

    Ok(storage.get_habit(&habit_id)?)
}
