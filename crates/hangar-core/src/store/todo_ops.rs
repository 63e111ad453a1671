//! Todo operations for the Store.

use std::sync::Arc;

use tokio::task;

use super::Store;
use crate::{
    db::Database,
    error::{HangarError, Result},
    models::TodoUpdate,
    params::NewTodo,
};

impl Store {
    /// Appends a new todo to the collection.
    ///
    /// Resolves once the write is acknowledged. The fresh identifier is not
    /// returned; it becomes visible through the next subscription snapshot.
    pub async fn create_todo(&self, todo: &NewTodo) -> Result<()> {
        let db_path = self.db_path.clone();
        let todo = todo.clone();

        let snapshot = task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.create_todo(&todo)?;
            db.list_todos()
        })
        .await
        .map_err(|e| HangarError::Runtime {
            message: format!("Task join error: {e}"),
        })??;

        self.todos_tx.send_replace(Arc::new(snapshot));
        Ok(())
    }

    /// Merges the supplied fields into the identified todo.
    pub async fn update_todo(&self, id: &str, update: TodoUpdate) -> Result<()> {
        let db_path = self.db_path.clone();
        let id = id.to_string();

        let snapshot = task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.update_todo(&id, &update)?;
            db.list_todos()
        })
        .await
        .map_err(|e| HangarError::Runtime {
            message: format!("Task join error: {e}"),
        })??;

        self.todos_tx.send_replace(Arc::new(snapshot));
        Ok(())
    }

    /// Removes the identified todo. Subsequent snapshots omit it.
    pub async fn delete_todo(&self, id: &str) -> Result<()> {
        let db_path = self.db_path.clone();
        let id = id.to_string();

        let snapshot = task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.delete_todo(&id)?;
            db.list_todos()
        })
        .await
        .map_err(|e| HangarError::Runtime {
            message: format!("Task join error: {e}"),
        })??;

        self.todos_tx.send_replace(Arc::new(snapshot));
        Ok(())
    }
}
