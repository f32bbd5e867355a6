//! Wire DTOs for the GraphQL endpoint.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of a GraphQL request.
#[derive(Debug, Clone, Serialize)]
pub struct GraphQLRequest {
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<Value>,
}

/// Envelope of a GraphQL response. `data` is absent when the request failed
/// validation; `errors` is absent when everything resolved.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQLResponse {
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub errors: Vec<GraphQLError>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GraphQLError {
    pub message: String,
}

/// A todo as selected by this client.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct TodoView {
    pub id: String,
    pub text: String,
    pub done: bool,
    /// `None` when the todo's owner is unknown to the server.
    pub user: Option<UserView>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct UserView {
    pub id: String,
    pub name: String,
}
