/// Habit entity and related functionality
///
/// This module defines the core Habit struct that represents a recurring
/// activity the user wants to track, along with its validation rules.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{CompletedDate, DomainError, HabitId};

/// A habit represents something the user wants to do regularly
///
/// Each habit owns the list of calendar dates on which it was completed.
/// The wire format is camelCase to match the JSON the frontend consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    /// Unique identifier for this habit
    pub id: HabitId,
    /// Display name (e.g., "Exercise", "Read for 30min")
    pub name: String,
    /// When this habit was created
    pub created_at: DateTime<Utc>,
    /// Dates on which this habit was completed
    pub completed_dates: Vec<CompletedDate>,
}

impl Habit {
    /// Create a new habit with validation
    ///
    /// A fresh habit starts with no completed dates.
    pub fn new(name: String) -> Result<Self, DomainError> {
        Self::validate_name(&name)?;

        Ok(Self {
            id: HabitId::new(),
            name,
            created_at: Utc::now(),
            completed_dates: Vec::new(),
        })
    }

    /// Create a habit from existing data (used when loading from the database)
    ///
    /// This constructor assumes data is already validated and is mainly used
    /// by the storage layer.
    pub fn from_existing(
        id: HabitId,
        name: String,
        created_at: DateTime<Utc>,
        completed_dates: Vec<CompletedDate>,
    ) -> Self {
        Self {
            id,
            name,
            created_at,
            completed_dates,
        }
    }

    /// Rename the habit, applying the same validation as creation
    pub fn rename(&mut self, name: String) -> Result<(), DomainError> {
        Self::validate_name(&name)?;
        self.name = name;
        Ok(())
    }

    /// Validate a habit name according to business rules
    pub fn validate_name(name: &str) -> Result<(), DomainError> {
        let trimmed = name.trim();

        if trimmed.is_empty() {
            return Err(DomainError::InvalidHabitName(
                "Habit name cannot be empty".to_string(),
            ));
        }

        if trimmed.len() > 100 {
            return Err(DomainError::InvalidHabitName(
                "Habit name cannot be longer than 100 characters".to_string(),
            ));
        }

        Ok(())
    }
}
