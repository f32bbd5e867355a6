//! Error types for the todo GraphQL client.
//!
//! # Design
//! Transport-level failures (`HttpError`) are kept apart from GraphQL-level
//! failures (`GraphQL`), which arrive with a 200 status and an `errors`
//! array in the body.

use thiserror::Error;

/// Errors returned by `TodoClient` parse and build methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned a non-200 status.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response carried one or more GraphQL errors.
    #[error("GraphQL errors: {}", .0.join("; "))]
    GraphQL(Vec<String>),

    /// The response had neither errors nor the expected data field.
    #[error("response is missing field `{0}`")]
    MissingData(&'static str),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),
}
