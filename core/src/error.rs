//! Error types for the todo core.

use thiserror::Error;

/// Errors returned by store and resolver operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// No entity with the given id exists.
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// The caller supplied input that strict validation rejects.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl StoreError {
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Stable machine-readable code, surfaced to GraphQL clients as the
    /// `code` error extension. Only `InvalidInput` reaches the schema today:
    /// `Todo.user` maps `NotFound` to null instead of raising it.
    pub fn code(&self) -> &'static str {
        match self {
            StoreError::NotFound { .. } => "NOT_FOUND",
            StoreError::InvalidInput(_) => "INVALID_INPUT",
        }
    }
}

/// Result type for core operations.
pub type StoreResult<T> = Result<T, StoreError>;
