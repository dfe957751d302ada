/// Domain module containing core entities and data types
///
/// This module defines the two entities in the system (Habit, CompletedDate)
/// and their validation rules.

pub mod habit;
pub mod completion;
pub mod types;

// Re-export public types for easy access
pub use habit::*;
pub use completion::*;
pub use types::*;

use thiserror::Error;

/// Errors that can occur during domain operations
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid habit name: {0}")]
    InvalidHabitName(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),
}
