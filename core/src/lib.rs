//! In-memory domain core for the todo GraphQL service.
//!
//! # Overview
//! Owns the two collections the service exposes: a read-only
//! [`UserDirectory`] seeded at startup and an append-only [`TodoStore`].
//! The [`TodoResolver`] trait is the only surface the GraphQL layer calls
//! into: list todos, create a todo, and resolve a todo's owning user.
//!
//! # Design
//! - Neither collection is global. Both are owned values injected into
//!   [`Resolver`] at construction, so every test builds its own isolated set.
//! - The todo -> user relation is stored as an id and resolved lazily; a
//!   dangling id resolves to `None` rather than an error.
//! - Nothing here knows about GraphQL or HTTP.

pub mod error;
pub mod resolver;
pub mod store;
pub mod types;
pub mod users;

pub use error::{StoreError, StoreResult};
pub use resolver::{InputValidation, Resolver, TodoResolver};
pub use store::TodoStore;
pub use types::{NewTodo, Todo, User};
pub use users::UserDirectory;
