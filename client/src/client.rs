//! Stateless request builder and response parser for the todo GraphQL API.
//!
//! # Design
//! `TodoClient` holds only a `base_url`. Each operation has a `build_*`
//! method that produces an `HttpRequest` and a `parse_*` method that
//! consumes the matching `HttpResponse`. Selections are fixed per operation,
//! so parsing always targets the same DTO shape.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use todo_core::NewTodo;

use crate::types::{GraphQLRequest, GraphQLResponse, TodoView};

const TODO_FIELDS: &str = "id text done user { id name }";

/// Synchronous, stateless client for the todo GraphQL API.
#[derive(Debug, Clone)]
pub struct TodoClient {
    base_url: String,
}

impl TodoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_todos(&self) -> Result<HttpRequest, ApiError> {
        self.build(GraphQLRequest {
            query: format!("query Todos {{ todos {{ {TODO_FIELDS} }} }}"),
            variables: None,
        })
    }

    pub fn build_create_todo(&self, input: &NewTodo) -> Result<HttpRequest, ApiError> {
        let input =
            serde_json::to_value(input).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        self.build(GraphQLRequest {
            query: format!(
                "mutation CreateTodo($input: NewTodo!) {{ createTodo(input: $input) {{ {TODO_FIELDS} }} }}"
            ),
            variables: Some(serde_json::json!({ "input": input })),
        })
    }

    pub fn parse_todos(&self, response: HttpResponse) -> Result<Vec<TodoView>, ApiError> {
        parse_field(response, "todos")
    }

    pub fn parse_create_todo(&self, response: HttpResponse) -> Result<TodoView, ApiError> {
        parse_field(response, "createTodo")
    }

    fn build(&self, request: GraphQLRequest) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(&request)
            .map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            url: format!("{}/query", self.base_url),
            headers: vec![
                ("content-type".to_string(), "application/json".to_string()),
                ("accept".to_string(), "application/json".to_string()),
            ],
            body,
        })
    }
}

/// Check the status, surface GraphQL errors, then deserialize `data.<field>`.
fn parse_field<T: DeserializeOwned>(
    response: HttpResponse,
    field: &'static str,
) -> Result<T, ApiError> {
    if response.status != 200 {
        return Err(ApiError::HttpError {
            status: response.status,
            body: response.body,
        });
    }

    let envelope: GraphQLResponse = serde_json::from_str(&response.body)
        .map_err(|e| ApiError::DeserializationError(e.to_string()))?;
    if !envelope.errors.is_empty() {
        return Err(ApiError::GraphQL(
            envelope.errors.into_iter().map(|e| e.message).collect(),
        ));
    }

    let value = match envelope.data {
        Some(Value::Object(mut data)) => data.remove(field),
        _ => None,
    }
    .ok_or(ApiError::MissingData(field))?;
    serde_json::from_value(value).map_err(|e| ApiError::DeserializationError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> TodoClient {
        TodoClient::new("http://localhost:8085")
    }

    fn body_of(req: &HttpRequest) -> Value {
        serde_json::from_str(&req.body).unwrap()
    }

    #[test]
    fn build_todos_produces_correct_request() {
        let req = client().build_todos().unwrap();
        assert_eq!(req.url, "http://localhost:8085/query");
        assert!(req
            .headers
            .contains(&("content-type".to_string(), "application/json".to_string())));
        let body = body_of(&req);
        assert!(body["query"].as_str().unwrap().contains("todos"));
        assert!(body.get("variables").is_none());
    }

    #[test]
    fn build_create_todo_passes_input_as_variables() {
        let req = client().build_create_todo(&NewTodo::new("todo", "1")).unwrap();
        let body = body_of(&req);
        assert!(body["query"].as_str().unwrap().contains("createTodo(input: $input)"));
        assert_eq!(
            body["variables"],
            serde_json::json!({ "input": { "text": "todo", "userId": "1" } })
        );
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = TodoClient::new("http://localhost:8085/");
        let req = client.build_todos().unwrap();
        assert_eq!(req.url, "http://localhost:8085/query");
    }

    #[test]
    fn parse_todos_success() {
        let response = HttpResponse::ok(
            r#"{"data":{"todos":[{"id":"a","text":"todo","done":false,"user":{"id":"1","name":"user 1"}}]}}"#,
        );
        let todos = client().parse_todos(response).unwrap();
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].text, "todo");
        assert_eq!(todos[0].user.as_ref().unwrap().name, "user 1");
    }

    #[test]
    fn parse_todos_null_user() {
        let response = HttpResponse::ok(
            r#"{"data":{"todos":[{"id":"a","text":"orphan","done":false,"user":null}]}}"#,
        );
        let todos = client().parse_todos(response).unwrap();
        assert!(todos[0].user.is_none());
    }

    #[test]
    fn parse_create_todo_graphql_error() {
        let response = HttpResponse::ok(
            r#"{"data":null,"errors":[{"message":"invalid input: unknown user id: 42","extensions":{"code":"INVALID_INPUT"}}]}"#,
        );
        let err = client().parse_create_todo(response).unwrap_err();
        match err {
            ApiError::GraphQL(messages) => {
                assert_eq!(messages, vec!["invalid input: unknown user id: 42"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn parse_wrong_status() {
        let response = HttpResponse::new(500, "internal error");
        let err = client().parse_todos(response).unwrap_err();
        assert!(matches!(err, ApiError::HttpError { status: 500, .. }));
    }

    #[test]
    fn parse_missing_field() {
        let response = HttpResponse::ok(r#"{"data":{}}"#);
        let err = client().parse_create_todo(response).unwrap_err();
        assert!(matches!(err, ApiError::MissingData("createTodo")));
    }

    #[test]
    fn parse_bad_json() {
        let err = client().parse_todos(HttpResponse::ok("not json")).unwrap_err();
        assert!(matches!(err, ApiError::DeserializationError(_)));
    }
}
