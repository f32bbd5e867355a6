//! Domain records for users and todos.

use serde::{Deserialize, Serialize};

/// A user known to the [`UserDirectory`](crate::UserDirectory).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub name: String,
}

impl User {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A single todo item. `user_id` references a [`User`] by id and is not
/// checked against the directory unless strict validation is enabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    pub id: String,
    pub text: String,
    pub done: bool,
    pub user_id: String,
}

/// Input for creating a todo. Serializes in the GraphQL `NewTodo` input
/// shape (`{"text": .., "userId": ..}`), so clients can send it as-is.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewTodo {
    pub text: String,
    pub user_id: String,
}

impl NewTodo {
    pub fn new(text: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            user_id: user_id.into(),
        }
    }
}
