/// Listing habits
///
/// Returns every habit together with its completed dates, newest habit
/// first. A direct pass-through; the storage layer does the work.

use crate::domain::Habit;
use crate::service::ServiceError;
use crate::storage::HabitStorage;

/// List all habits with their completions
pub fn list_habits<S: HabitStorage>(storage: &S) -> Result<Vec<Habit>, ServiceError> {
    Ok(storage.list_habits()?)
}
