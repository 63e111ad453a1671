//! Todo list controller.

use std::sync::Arc;

use jiff::Timestamp;
use log::error;

use crate::{
    models::{Todo, TodoStatus, TodoUpdate},
    params::NewTodo,
    store::{Store, Subscription},
};

/// Derives the presented todo order from a snapshot: ascending creation
/// time, stable on ties.
pub fn sorted_todos(todos: &[Todo]) -> Vec<Todo> {
    let mut sorted = todos.to_vec();
    sorted.sort_by_key(|todo| todo.created_at);
    sorted
}

/// Holds the live todo list and dispatches todo intents to the store
/// gateway.
pub struct TodoController {
    store: Arc<Store>,
    subscription: Subscription<Todo>,
}

impl TodoController {
    /// Creates a controller subscribed to the todo collection.
    pub fn new(store: Arc<Store>) -> Self {
        let subscription = store.todos();
        Self {
            store,
            subscription,
        }
    }

    /// The todos in presentation order, derived from the latest snapshot.
    pub fn todos(&self) -> Vec<Todo> {
        sorted_todos(&self.subscription.snapshot())
    }

    /// Waits for the next snapshot. Returns `false` once the store is gone.
    pub async fn refresh(&mut self) -> bool {
        self.subscription.next().await.is_some()
    }

    /// Submits a new todo.
    ///
    /// Text that trims to empty is rejected silently: no store call, and
    /// `false` is returned so the caller keeps the input as-is. Otherwise
    /// the todo is created pending, stamped with the submission time, the
    /// text stored exactly as given, and `true` is returned.
    pub async fn add(&self, text: &str) -> bool {
        if text.trim().is_empty() {
            return false;
        }

        let todo = NewTodo {
            text: text.to_string(),
            status: TodoStatus::Pending,
            created_at: Timestamp::now().as_millisecond(),
        };
        if let Err(err) = self.store.create_todo(&todo).await {
            error!("Failed to add todo: {err}");
        }
        true
    }

    /// Whether the start action is available for a todo.
    ///
    /// Presentation shows the affordance only while this holds, which is
    /// what keeps the pending → in-progress transition one-shot; the
    /// gateway itself carries no guard.
    pub fn can_start(todo: &Todo) -> bool {
        todo.status == TodoStatus::Pending
    }

    /// Starts a pending todo.
    ///
    /// A no-op unless the locally held snapshot shows the todo as pending;
    /// the issued update carries exactly the status field.
    pub async fn start(&self, id: &str) {
        let snapshot = self.subscription.snapshot();
        let Some(todo) = snapshot.iter().find(|todo| todo.id == id) else {
            return;
        };
        if !Self::can_start(todo) {
            return;
        }

        if let Err(err) = self
            .store
            .update_todo(id, TodoUpdate::status(TodoStatus::InProgress))
            .await
        {
            error!("Failed to start todo {id}: {err}");
        }
    }

    /// Deletes one todo.
    pub async fn remove(&self, id: &str) {
        if let Err(err) = self.store.delete_todo(id).await {
            error!("Failed to delete todo {id}: {err}");
        }
    }
}
