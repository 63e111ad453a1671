//! Builder for creating and configuring Store instances.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::{sync::watch, task};

use super::Store;
use crate::{
    db::Database,
    error::{HangarError, Result},
};

/// Builder for creating and configuring Store instances.
#[derive(Debug, Clone)]
pub struct StoreBuilder {
    database_path: Option<PathBuf>,
}

impl StoreBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/hangar/hangar.db` or `~/.local/share/hangar/hangar.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the configured store.
    ///
    /// Opens the database, initializes the schema, and seeds both snapshot
    /// channels with the initial collection contents so the first
    /// subscription observes a snapshot immediately.
    ///
    /// # Errors
    ///
    /// Returns `HangarError::FileSystem` if the database path is invalid
    /// Returns `HangarError::Database` if database initialization fails
    pub async fn build(self) -> Result<Store> {
        let db_path = if let Some(path) = self.database_path {
            path
        } else {
            Self::default_database_path()?
        };

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| HangarError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let db_path_clone = db_path.clone();
        let (planes, todos) = task::spawn_blocking(move || {
            let db = Database::new(&db_path_clone)?;
            Ok::<_, HangarError>((db.list_planes()?, db.list_todos()?))
        })
        .await
        .map_err(|e| HangarError::Runtime {
            message: format!("Task join error: {e}"),
        })??;

        let (planes_tx, _) = watch::channel(Arc::new(planes));
        let (todos_tx, _) = watch::channel(Arc::new(todos));

        Ok(Store {
            db_path,
            planes_tx,
            todos_tx,
        })
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("hangar")
            .place_data_file("hangar.db")
            .map_err(|e| HangarError::XdgDirectory(e.to_string()))
    }
}

impl Default for StoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}
