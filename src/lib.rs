/// Public library interface for the habit tracker API server
///
/// This module exports the server implementation and public types
/// that can be used by other applications or tests.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

// Internal modules
mod domain;
mod storage;
mod service;
mod http;

// Re-export public modules and types
pub use domain::*;
pub use http::router;
pub use service::*;
pub use storage::{HabitStorage, SqliteStorage, StorageError};

/// Errors that can occur during server operation
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Database error: {0}")]
    Database(#[from] storage::StorageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// The habit tracker HTTP server
///
/// Owns the SQLite storage and serves the JSON API for creating habits,
/// renaming and deleting them, and toggling per-date completions.
pub struct HabitTrackerServer {
    storage: Arc<SqliteStorage>,
    addr: SocketAddr,
}

impl HabitTrackerServer {
    /// Create a new server with the specified database path and bind address
    ///
    /// This will initialize the SQLite database with the required schema
    /// if it doesn't already exist.
    pub fn new(db_path: PathBuf, addr: SocketAddr) -> Result<Self, ServerError> {
        tracing::info!("Initializing habit tracker server with database: {:?}", db_path);

        let storage = Arc::new(SqliteStorage::new(db_path)?);

        Ok(Self { storage, addr })
    }

    /// Run the HTTP server
    ///
    /// This method will block until the server is shut down or an error occurs.
    pub async fn run(self) -> Result<(), ServerError> {
        // Test database connectivity before accepting requests
        let habits = self.storage.list_habits()?;
        tracing::info!("Found {} existing habits", habits.len());

        let app = http::router(self.storage);

        let listener = tokio::net::TcpListener::bind(self.addr).await?;
        tracing::info!("Listening on {}", self.addr);

        axum::serve(listener, app).await?;

        Ok(())
    }

    /// Get a reference to the storage layer (useful for testing)
    pub fn storage(&self) -> &SqliteStorage {
        &self.storage
    }
}
