//! The resolver facade consumed by the GraphQL layer.
//!
//! [`TodoResolver`] names the three operations the schema binds: the
//! `todos` query, the `createTodo` mutation, and the `Todo.user` field.
//! [`Resolver`] implements them over an injected [`TodoStore`] and
//! [`UserDirectory`].

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::error::{StoreError, StoreResult};
use crate::store::TodoStore;
use crate::types::{NewTodo, Todo, User};
use crate::users::UserDirectory;

/// How `create_todo` treats its input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputValidation {
    /// Accept any text and any user id. A dangling user id only shows up
    /// later, as a null `user` field.
    #[default]
    Permissive,
    /// Reject blank text and user ids the directory does not know.
    Strict,
}

/// Operations the GraphQL schema dispatches to.
#[async_trait]
pub trait TodoResolver: Send + Sync {
    /// Query `todos`.
    async fn todos(&self) -> Vec<Todo>;

    /// Mutation `createTodo`.
    async fn create_todo(&self, input: NewTodo) -> StoreResult<Todo>;

    /// Field `Todo.user`. `None` when the todo's user id is unknown.
    async fn todo_user(&self, todo: &Todo) -> Option<User>;
}

#[derive(Debug, Clone)]
pub struct Resolver {
    todos: Arc<TodoStore>,
    users: Arc<UserDirectory>,
    validation: InputValidation,
}

impl Resolver {
    pub fn new(todos: Arc<TodoStore>, users: Arc<UserDirectory>) -> Self {
        Self {
            todos,
            users,
            validation: InputValidation::default(),
        }
    }

    /// An empty store over the default seeded directory.
    pub fn seeded() -> Self {
        Self::new(Arc::new(TodoStore::new()), Arc::new(UserDirectory::seeded()))
    }

    pub fn with_validation(mut self, validation: InputValidation) -> Self {
        self.validation = validation;
        self
    }

    pub fn validation(&self) -> InputValidation {
        self.validation
    }

    fn validate(&self, input: &NewTodo) -> StoreResult<()> {
        if self.validation == InputValidation::Permissive {
            return Ok(());
        }
        if input.text.trim().is_empty() {
            return Err(StoreError::invalid_input("text must not be empty"));
        }
        if !self.users.contains(&input.user_id) {
            return Err(StoreError::invalid_input(format!(
                "unknown user id: {}",
                input.user_id
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl TodoResolver for Resolver {
    async fn todos(&self) -> Vec<Todo> {
        self.todos.list().await
    }

    async fn create_todo(&self, input: NewTodo) -> StoreResult<Todo> {
        if let Err(err) = self.validate(&input) {
            warn!(user_id = %input.user_id, error = %err, "rejected createTodo input");
            return Err(err);
        }
        let todo = self.todos.create(input.text, input.user_id).await;
        info!(todo_id = %todo.id, user_id = %todo.user_id, "created todo");
        Ok(todo)
    }

    async fn todo_user(&self, todo: &Todo) -> Option<User> {
        match self.users.get(&todo.user_id) {
            Ok(user) => Some(user),
            Err(err) => {
                debug!(todo_id = %todo.id, error = %err, "todo owner unresolved");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn create_then_list_resolves_owner() {
        let resolver = Resolver::seeded();
        let created = resolver.create_todo(NewTodo::new("todo", "1")).await.unwrap();

        let todos = resolver.todos().await;
        assert_eq!(todos, vec![created.clone()]);

        let user = resolver.todo_user(&created).await.unwrap();
        assert_eq!(user.id, "1");
        assert_eq!(user.name, "user 1");
    }

    #[tokio::test]
    async fn unknown_owner_resolves_to_none() {
        let resolver = Resolver::seeded();
        let created = resolver.create_todo(NewTodo::new("orphan", "nonexistent")).await.unwrap();
        assert!(resolver.todo_user(&created).await.is_none());
    }

    #[tokio::test]
    async fn strict_rejects_blank_text() {
        let resolver = Resolver::seeded().with_validation(InputValidation::Strict);
        let err = resolver.create_todo(NewTodo::new("   ", "1")).await.unwrap_err();
        assert!(matches!(err, StoreError::InvalidInput(_)));
        assert!(resolver.todos().await.is_empty());
    }

    #[tokio::test]
    async fn strict_rejects_unknown_user() {
        let resolver = Resolver::seeded().with_validation(InputValidation::Strict);
        let err = resolver.create_todo(NewTodo::new("todo", "2")).await.unwrap_err();
        assert_eq!(err, StoreError::invalid_input("unknown user id: 2"));
    }

    #[tokio::test]
    async fn permissive_accepts_empty_text() {
        let resolver = Resolver::seeded();
        assert_eq!(resolver.validation(), InputValidation::Permissive);
        let todo = resolver.create_todo(NewTodo::new("", "1")).await.unwrap();
        assert_eq!(todo.text, "");
    }
}
