//! Todo collection queries.

use rusqlite::{params, types::Type};
use uuid::Uuid;

use crate::{
    error::{DatabaseResultExt, HangarError, Result},
    models::{Todo, TodoStatus, TodoUpdate},
    params::NewTodo,
};

const INSERT_TODO_SQL: &str =
    "INSERT INTO todos (id, text, status, created_at) VALUES (?1, ?2, ?3, ?4)";
const SELECT_TODOS_SQL: &str = "SELECT id, text, status, created_at FROM todos";
const UPDATE_TODO_STATUS_SQL: &str = "UPDATE todos SET status = ?1 WHERE id = ?2";
const DELETE_TODO_SQL: &str = "DELETE FROM todos WHERE id = ?1";
const CHECK_TODO_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM todos WHERE id = ?1)";

impl super::Database {
    /// Helper function to construct a Todo from a database row.
    fn build_todo_from_row(row: &rusqlite::Row) -> rusqlite::Result<Todo> {
        let status_str: String = row.get(2)?;
        let status = status_str.parse::<TodoStatus>().map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                2,
                Type::Text,
                format!("Invalid todo status: {status_str}").into(),
            )
        })?;

        Ok(Todo {
            id: row.get(0)?,
            text: row.get(1)?,
            status,
            created_at: row.get(3)?,
        })
    }

    /// Appends a new todo, assigning a fresh identifier.
    pub fn create_todo(&self, todo: &NewTodo) -> Result<Todo> {
        let id = Uuid::new_v4().to_string();

        self.connection
            .execute(
                INSERT_TODO_SQL,
                params![&id, &todo.text, todo.status.as_str(), todo.created_at],
            )
            .db_context("Failed to insert todo")?;

        Ok(Todo {
            id,
            text: todo.text.clone(),
            status: todo.status,
            created_at: todo.created_at,
        })
    }

    /// Reads the full todo collection.
    ///
    /// Row order is whatever the store returns; presentation re-sorts.
    pub fn list_todos(&self) -> Result<Vec<Todo>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_TODOS_SQL)
            .db_context("Failed to prepare todo query")?;

        let todos = stmt
            .query_map([], Self::build_todo_from_row)
            .db_context("Failed to query todos")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch todos")?;

        Ok(todos)
    }

    /// Merges the supplied fields into the identified todo.
    ///
    /// Fails with [`HangarError::TodoNotFound`] when the identifier does not
    /// exist (including after a delete).
    pub fn update_todo(&self, id: &str, update: &TodoUpdate) -> Result<()> {
        let Some(status) = update.status else {
            let exists: bool = self
                .connection
                .query_row(CHECK_TODO_EXISTS_SQL, params![id], |row| row.get(0))
                .db_context("Failed to check todo existence")?;
            if !exists {
                return Err(HangarError::TodoNotFound { id: id.to_string() });
            }
            return Ok(());
        };

        let rows_affected = self
            .connection
            .execute(UPDATE_TODO_STATUS_SQL, params![status.as_str(), id])
            .db_context("Failed to update todo")?;

        if rows_affected == 0 {
            return Err(HangarError::TodoNotFound { id: id.to_string() });
        }

        Ok(())
    }

    /// Removes the identified todo. Deleting an absent id is not an error.
    pub fn delete_todo(&self, id: &str) -> Result<()> {
        self.connection
            .execute(DELETE_TODO_SQL, params![id])
            .db_context("Failed to delete todo")?;

        Ok(())
    }
}
