//! Read-only user directory.
//!
//! The directory is populated once at construction and never mutated, so
//! lookups need no locking and the whole value can be shared behind an `Arc`.

use std::collections::HashMap;

use crate::error::{StoreError, StoreResult};
use crate::types::User;

#[derive(Debug, Clone, Default)]
pub struct UserDirectory {
    users: HashMap<String, User>,
}

impl UserDirectory {
    /// The default directory: a single user `"1"` named `"user 1"`.
    pub fn seeded() -> Self {
        Self::from_users([User::new("1", "user 1")])
    }

    /// Build a directory from an explicit set of users. A later user with a
    /// duplicate id replaces the earlier one.
    pub fn from_users(users: impl IntoIterator<Item = User>) -> Self {
        Self {
            users: users.into_iter().map(|u| (u.id.clone(), u)).collect(),
        }
    }

    pub fn get(&self, id: &str) -> StoreResult<User> {
        self.users
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("User", id))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.users.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
