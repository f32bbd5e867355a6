//! HTTP surface of the todo GraphQL service.
//!
//! Routes:
//! - `POST /query`, `GET /query`: GraphQL endpoint
//! - `GET /`: GraphiQL playground pointed at `/query`

use std::sync::Arc;

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{extract::State, response::Html, routing::get, Router};
use todo_core::{Resolver, TodoResolver};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod schema;

pub use config::{ConfigError, ServerConfig};
pub use schema::{build_schema, TodoSchema};

pub const QUERY_PATH: &str = "/query";

/// Router over a fresh store and the default seeded users.
pub fn app() -> Router {
    router(Arc::new(Resolver::seeded()))
}

/// Router over the given resolver. Clones of the returned router share it.
pub fn router(resolver: Arc<dyn TodoResolver>) -> Router {
    let schema = build_schema(resolver);
    Router::new()
        .route(QUERY_PATH, get(graphql).post(graphql))
        .route("/", get(playground))
        .layer(TraceLayer::new_for_http())
        .with_state(schema)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn graphql(State(schema): State<TodoSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn playground() -> Html<String> {
    Html(
        GraphiQLSource::build()
            .endpoint(QUERY_PATH)
            .title("GraphQL playground")
            .finish(),
    )
}
