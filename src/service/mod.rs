/// Service layer: one file per operation
///
/// Each operation validates its input, calls into storage, and maps
/// failures onto a small typed error set. These functions are generic over
/// the HabitStorage trait, which keeps them independent of SQLite.

pub mod list;
pub mod create;
pub mod update;
pub mod delete;
pub mod toggle;

// Re-export the operations and their parameter types
pub use list::*;
pub use create::*;
pub use update::*;
pub use delete::*;
pub use toggle::*;

use thiserror::Error;

use crate::domain::{DomainError, HabitId};
use crate::storage::StorageError;

/// Errors surfaced by service operations
///
/// Validation failures and missing habits are pulled out of the storage
/// error so the transport layer can map them to 400/404 without inspecting
/// storage internals. Everything else stays a storage failure (500).
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("{0}")]
    Validation(String),

    #[error("Habit not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Storage(StorageError),
}

impl From<StorageError> for ServiceError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::HabitNotFound { habit_id } => ServiceError::NotFound(habit_id),
            other => ServiceError::Storage(other),
        }
    }
}

impl From<DomainError> for ServiceError {
    fn from(err: DomainError) -> Self {
        ServiceError::Validation(err.to_string())
    }
}

/// Parse a habit ID from a path parameter
///
/// An id that is not a valid UUID cannot reference an existing habit, so
/// it reports as NotFound rather than a validation failure.
pub(crate) fn parse_habit_id(habit_id: &str) -> Result<HabitId, ServiceError> {
    HabitId::from_string(habit_id).map_err(|_| ServiceError::NotFound(habit_id.to_string()))
}
