//! API Routes
//!
//! HTTP endpoint definitions.

use async_graphql::http::GraphiQLSource;
use axum::{
    extract::{Extension, State},
    response::Html,
    routing::get,
    Json, Router,
};

use crate::error::AppResult;
use crate::store::SharedStore;

use super::context::RequestContext;
use super::schema::{build_schema, EmployeeSchema};

/// Plain-text banner served at the root
pub const BANNER: &str = "My employee management system Server";

/// Path of the GraphQL endpoint
pub const GRAPHQL_PATH: &str = "/graphql";

/// Shared state for all handlers
#[derive(Clone)]
pub struct AppState {
    pub schema: EmployeeSchema,
    pub store: SharedStore,
}

impl AppState {
    pub fn new(store: SharedStore) -> Self {
        Self {
            schema: build_schema(store.clone()),
            store,
        }
    }
}

// =========================================================================
// API Router
// =========================================================================

/// Create the API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/", get(banner))
        .route("/health", get(health_check))
        .route(GRAPHQL_PATH, get(graphiql).post(graphql))
}

/// Root banner
async fn banner() -> &'static str {
    BANNER
}

/// Health check endpoint; fails when the record store is unreachable
async fn health_check(State(state): State<AppState>) -> AppResult<&'static str> {
    state.store.health().await?;
    Ok("OK")
}

/// Interactive GraphiQL page
async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}

/// Execute a GraphQL request.
///
/// GraphQL-level failures are reported in the `errors` list of a 200 response.
async fn graphql(
    State(state): State<AppState>,
    context: Option<Extension<RequestContext>>,
    Json(request): Json<async_graphql::Request>,
) -> Json<async_graphql::Response> {
    let request = match context {
        Some(Extension(context)) => request.data(context),
        None => request,
    };

    let response = state.schema.execute(request).await;
    if response.is_err() {
        tracing::debug!(errors = ?response.errors, "GraphQL request completed with errors");
    }

    Json(response)
}
