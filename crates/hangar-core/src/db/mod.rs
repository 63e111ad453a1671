//! SQLite-backed document collections.
//!
//! This module is the synchronous storage layer under the store gateway. It
//! owns the SQLite connection, initializes the schema, and provides the
//! per-collection query interfaces for planes and todos. Everything above it
//! treats the store as an opaque collaborator; nothing above it sees SQL.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod plane_queries;
pub mod todo_queries;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Initializes the collection tables using the embedded SQL file.
    fn initialize_schema(&self) -> Result<()> {
        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")
    }
}
