//! Synchronous GraphQL client core for the todo service.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). The caller executes the
//! actual HTTP round-trip against the server's `/query` endpoint.
//!
//! # Design
//! - `TodoClient` is stateless; it holds only `base_url`.
//! - Each operation is split into `build_*` and `parse_*` so the I/O
//!   boundary is explicit.
//! - The mutation input is the core's `NewTodo`, which serializes in the
//!   GraphQL input shape. Response DTOs are defined independently from the
//!   server crate; the integration test catches schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod types;

pub use client::TodoClient;
pub use error::ApiError;
pub use http::{HttpRequest, HttpResponse};
pub use todo_core::NewTodo;
pub use types::{GraphQLRequest, TodoView, UserView};
