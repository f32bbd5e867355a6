//! Append-only in-memory todo store.
//!
//! Todos are kept in creation order in a `Vec` behind a tokio `RwLock`.
//! Id generation and the append happen under the same write guard, so
//! concurrent creates can neither interleave nor observe each other's
//! half-built state. Reads clone a snapshot under the read guard.

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::types::Todo;

#[derive(Debug, Default)]
pub struct TodoStore {
    todos: RwLock<Vec<Todo>>,
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All todos in creation order.
    pub async fn list(&self) -> Vec<Todo> {
        self.todos.read().await.clone()
    }

    /// Append a new, not-done todo and return it.
    pub async fn create(&self, text: impl Into<String>, user_id: impl Into<String>) -> Todo {
        let mut todos = self.todos.write().await;
        let todo = Todo {
            id: Uuid::new_v4().to_string(),
            text: text.into(),
            done: false,
            user_id: user_id.into(),
        };
        todos.push(todo.clone());
        todo
    }

    pub async fn len(&self) -> usize {
        self.todos.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.todos.read().await.is_empty()
    }
}
