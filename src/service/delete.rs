/// Deleting habits

use serde::Serialize;

use crate::service::{parse_habit_id, ServiceError};
use crate::storage::HabitStorage;

/// Confirmation returned after a successful delete
#[derive(Debug, Serialize)]
pub struct DeleteHabitResponse {
    pub message: String,
}

/// Delete a habit by id
///
/// Completion records go with the habit; the schema cascades the delete.
pub fn delete_habit<S: HabitStorage>(
    storage: &S,
    habit_id: &str,
) -> Result<DeleteHabitResponse, ServiceError> {
    let habit_id = parse_habit_id(habit_id)?;
    storage.delete_habit(&habit_id)?;

    Ok(DeleteHabitResponse {
        message: "Habit deleted successfully".to_string(),
    })
}
