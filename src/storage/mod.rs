/// Storage layer for persisting habit data
///
/// This module handles all database operations using SQLite. It provides
/// a clean interface for storing and retrieving habits and their
/// per-date completion records.

pub mod sqlite;
pub mod migrations;

// Re-export the main storage types
pub use sqlite::*;

use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::{Habit, HabitId};

/// Errors that can occur during storage operations
///
/// Constraint violations, connectivity failures, and missing rows are
/// distinct variants so callers never have to sniff error strings to
/// find out what went wrong.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database connection error: {0}")]
    Connection(String),

    #[error("Database query error: {0}")]
    Query(rusqlite::Error),

    #[error("Constraint violation: {0}")]
    Constraint(String),

    #[error("Habit not found: {habit_id}")]
    HabitNotFound { habit_id: String },

    #[error("Migration error: {0}")]
    Migration(String),
}

impl From<rusqlite::Error> for StorageError {
    /// Classify SQLite failures by error code
    ///
    /// Constraint violations (unique index, foreign key) get their own
    /// variant; everything else stays a plain query error.
    fn from(err: rusqlite::Error) -> Self {
        match err {
            rusqlite::Error::SqliteFailure(code, ref message)
                if code.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                StorageError::Constraint(
                    message.clone().unwrap_or_else(|| code.to_string()),
                )
            }
            other => StorageError::Query(other),
        }
    }
}

/// Trait defining the storage interface for habits
///
/// This trait allows us to potentially swap out SQLite for other databases
/// in the future while keeping the same interface. The service layer is
/// generic over it, which also keeps it easy to test.
pub trait HabitStorage {
    /// Create a new habit
    fn create_habit(&self, habit: &Habit) -> Result<(), StorageError>;

    /// Get a habit by ID, with its completed dates
    fn get_habit(&self, habit_id: &HabitId) -> Result<Habit, StorageError>;

    /// Rename an existing habit
    fn rename_habit(&self, habit_id: &HabitId, name: &str) -> Result<(), StorageError>;

    /// Delete a habit; its completion records go with it
    fn delete_habit(&self, habit_id: &HabitId) -> Result<(), StorageError>;

    /// List all habits with their completed dates
    fn list_habits(&self) -> Result<Vec<Habit>, StorageError>;

    /// Flip the completion state of a habit for one calendar date
    ///
    /// Runs as a single transaction: the existence check and the
    /// delete-or-insert cannot interleave with another toggle. Returns
    /// the habit reloaded with its updated completion list.
    fn toggle_completion(
        &self,
        habit_id: &HabitId,
        date: NaiveDate,
    ) -> Result<Habit, StorageError>;
}
