//! Error types for the hangar library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all store and controller operations.
#[derive(Error, Debug)]
pub enum HangarError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Plane not found for the given identifier
    #[error("Plane with id {id} not found")]
    PlaneNotFound { id: String },
    /// Todo not found for the given identifier
    #[error("Todo with id {id} not found")]
    TodoNotFound { id: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Runtime errors (task scheduling, channel teardown)
    #[error("Runtime error: {message}")]
    Runtime { message: String },
}

impl HangarError {
    /// Creates a new database error with additional context.
    pub fn database(message: impl Into<String>, source: rusqlite::Error) -> Self {
        Self::Database {
            message: message.into(),
            source,
        }
    }

    /// Creates an input validation error for a field.
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| HangarError::database(message, e))
    }
}

/// Result type alias for hangar operations
pub type Result<T> = std::result::Result<T, HangarError>;
