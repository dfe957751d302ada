/// Creating new habits

use serde::Deserialize;

use crate::domain::Habit;
use crate::service::ServiceError;
use crate::storage::HabitStorage;

/// Request body for creating a habit
#[derive(Debug, Deserialize)]
pub struct CreateHabitParams {
    pub name: Option<String>,
}

/// Create a new habit using the provided storage
///
/// The name must be present and non-empty; the created habit is returned
/// with an empty completion list.
pub fn create_habit<S: HabitStorage>(
    storage: &S,
    params: CreateHabitParams,
) -> Result<Habit, ServiceError> {
    let name = params
        .name
        .filter(|n| !n.trim().is_empty())
        .ok_or_else(|| ServiceError::Validation("Habit name is required".to_string()))?;

    let habit = Habit::new(name)?;
    storage.create_habit(&habit)?;

    Ok(habit)
}
