/// SQLite implementation of the habit storage interface
///
/// This module provides the concrete SQLite implementation for storing
/// and retrieving habit data. It handles all SQL queries and data
/// conversion. The connection sits behind a mutex so the storage can be
/// shared across request handlers; every operation takes the lock once.

use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::{params, Connection};

use crate::domain::{CompletedDate, CompletionId, Habit, HabitId};
use crate::storage::{migrations, HabitStorage, StorageError};

/// SQLite-based storage implementation
pub struct SqliteStorage {
    conn: Mutex<Connection>,
}

impl SqliteStorage {
    /// Create a new SQLite storage instance
    ///
    /// This opens the database file and runs any necessary migrations
    /// to ensure the schema is up to date.
    pub fn new(db_path: PathBuf) -> Result<Self, StorageError> {
        // Open the SQLite database
        let conn = Connection::open(&db_path)
            .map_err(|e| StorageError::Connection(format!("Failed to open database: {}", e)))?;

        // Enable foreign key constraints; cascade deletes depend on this
        conn.execute("PRAGMA foreign_keys = ON", [])
            .map_err(|e| StorageError::Connection(format!("Failed to enable foreign keys: {}", e)))?;

        // Initialize/migrate the database schema
        migrations::initialize_database(&conn)?;

        tracing::info!("SQLite storage initialized at: {:?}", db_path);

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Acquire the connection lock
    fn conn(&self) -> Result<MutexGuard<'_, Connection>, StorageError> {
        self.conn
            .lock()
            .map_err(|_| StorageError::Connection("Database lock poisoned".to_string()))
    }

    /// Load all completion records for a habit, oldest date first
    fn load_completions(
        conn: &Connection,
        habit_id: &HabitId,
    ) -> Result<Vec<CompletedDate>, StorageError> {
        let mut stmt = conn.prepare(
            "SELECT id, date, habit_id FROM completed_dates
             WHERE habit_id = ?1 ORDER BY date ASC",
        )?;

        let completion_iter = stmt.query_map(params![habit_id.to_string()], |row| {
            let id_str: String = row.get(0)?;
            let id = CompletionId::from_string(&id_str).map_err(|_| {
                rusqlite::Error::InvalidColumnType(0, "Invalid UUID".to_string(), rusqlite::types::Type::Text)
            })?;

            let date: NaiveDate = row.get(1)?;

            let habit_id_str: String = row.get(2)?;
            let habit_id = HabitId::from_string(&habit_id_str).map_err(|_| {
                rusqlite::Error::InvalidColumnType(2, "Invalid UUID".to_string(), rusqlite::types::Type::Text)
            })?;

            Ok(CompletedDate::from_existing(id, date, habit_id))
        })?;

        let mut completions = Vec::new();
        for completion in completion_iter {
            completions.push(completion?);
        }

        Ok(completions)
    }

    /// Load a single habit with its completion records
    fn load_habit(conn: &Connection, habit_id: &HabitId) -> Result<Habit, StorageError> {
        let mut stmt =
            conn.prepare("SELECT id, name, created_at FROM habits WHERE id = ?1")?;

        let result = stmt.query_row(params![habit_id.to_string()], |row| {
            let id_str: String = row.get(0)?;
            let id = HabitId::from_string(&id_str).map_err(|_| {
                rusqlite::Error::InvalidColumnType(0, "Invalid UUID".to_string(), rusqlite::types::Type::Text)
            })?;

            let name: String = row.get(1)?;
            let created_at: DateTime<Utc> = row.get(2)?;

            Ok((id, name, created_at))
        });

        match result {
            Ok((id, name, created_at)) => {
                let completions = Self::load_completions(conn, habit_id)?;
                Ok(Habit::from_existing(id, name, created_at, completions))
            }
            Err(rusqlite::Error::QueryReturnedNoRows) => Err(StorageError::HabitNotFound {
                habit_id: habit_id.to_string(),
            }),
            Err(e) => Err(e.into()),
        }
    }
}

impl HabitStorage for SqliteStorage {
    /// Create a new habit in the database
    fn create_habit(&self, habit: &Habit) -> Result<(), StorageError> {
        let conn = self.conn()?;

        conn.execute(
            "INSERT INTO habits (id, name, created_at) VALUES (?1, ?2, ?3)",
            params![habit.id.to_string(), habit.name, habit.created_at],
        )?;

        tracing::debug!("Created habit: {} ({})", habit.name, habit.id);
        Ok(())
    }

    /// Get a habit by its ID, with completions attached
    fn get_habit(&self, habit_id: &HabitId) -> Result<Habit, StorageError> {
        let conn = self.conn()?;
        Self::load_habit(&conn, habit_id)
    }

    /// Rename an existing habit
    fn rename_habit(&self, habit_id: &HabitId, name: &str) -> Result<(), StorageError> {
        let conn = self.conn()?;

        let rows_affected = conn.execute(
            "UPDATE habits SET name = ?2 WHERE id = ?1",
            params![habit_id.to_string(), name],
        )?;

        if rows_affected == 0 {
            return Err(StorageError::HabitNotFound {
                habit_id: habit_id.to_string(),
            });
        }

        tracing::debug!("Renamed habit {} to '{}'", habit_id, name);
        Ok(())
    }

    /// Delete a habit; the cascade removes its completion records
    fn delete_habit(&self, habit_id: &HabitId) -> Result<(), StorageError> {
        let conn = self.conn()?;

        let rows_affected = conn.execute(
            "DELETE FROM habits WHERE id = ?1",
            params![habit_id.to_string()],
        )?;

        if rows_affected == 0 {
            return Err(StorageError::HabitNotFound {
                habit_id: habit_id.to_string(),
            });
        }

        tracing::debug!("Deleted habit: {}", habit_id);
        Ok(())
    }

    /// List all habits with their completed dates, newest habit first
    fn list_habits(&self) -> Result<Vec<Habit>, StorageError> {
        let conn = self.conn()?;

        let mut stmt = conn.prepare(
            "SELECT id, name, created_at FROM habits ORDER BY created_at DESC",
        )?;

        let habit_iter = stmt.query_map([], |row| {
            let id_str: String = row.get(0)?;
            let id = HabitId::from_string(&id_str).map_err(|_| {
                rusqlite::Error::InvalidColumnType(0, "Invalid UUID".to_string(), rusqlite::types::Type::Text)
            })?;

            let name: String = row.get(1)?;
            let created_at: DateTime<Utc> = row.get(2)?;

            Ok((id, name, created_at))
        })?;

        let mut rows = Vec::new();
        for row in habit_iter {
            rows.push(row?);
        }

        let mut habits = Vec::new();
        for (id, name, created_at) in rows {
            let completions = Self::load_completions(&conn, &id)?;
            habits.push(Habit::from_existing(id, name, created_at, completions));
        }

        Ok(habits)
    }

    /// Flip the completion state of a habit for one calendar date
    ///
    /// The existence check and the delete-or-insert run in a single
    /// transaction, so two concurrent toggles for the same (habit, date)
    /// serialize instead of racing. The unique index on (habit_id, date)
    /// backstops the insert path.
    fn toggle_completion(
        &self,
        habit_id: &HabitId,
        date: NaiveDate,
    ) -> Result<Habit, StorageError> {
        let mut conn = self.conn()?;
        let tx = conn.transaction()?;

        let habit_exists: bool = tx.query_row(
            "SELECT EXISTS(SELECT 1 FROM habits WHERE id = ?1)",
            params![habit_id.to_string()],
            |row| row.get(0),
        )?;

        if !habit_exists {
            // Dropping the transaction rolls it back
            return Err(StorageError::HabitNotFound {
                habit_id: habit_id.to_string(),
            });
        }

        let removed = tx.execute(
            "DELETE FROM completed_dates WHERE habit_id = ?1 AND date = ?2",
            params![habit_id.to_string(), date],
        )?;

        if removed == 0 {
            let completion = CompletedDate::new(habit_id.clone(), date);
            tx.execute(
                "INSERT INTO completed_dates (id, date, habit_id) VALUES (?1, ?2, ?3)",
                params![
                    completion.id.to_string(),
                    completion.date,
                    completion.habit_id.to_string()
                ],
            )?;
            tracing::debug!("Marked habit {} complete on {}", habit_id, date);
        } else {
            tracing::debug!("Unmarked habit {} for {}", habit_id, date);
        }

        tx.commit()?;

        Self::load_habit(&conn, habit_id)
    }
}
