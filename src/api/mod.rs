//! API module
//!
//! GraphQL endpoint, HTTP routes and middleware.

pub mod context;
pub mod middleware;
pub mod routes;
pub mod schema;

use axum::http::{HeaderValue, Method};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::config::ConfigError;

pub use context::RequestContext;
pub use routes::{create_router, AppState};
pub use schema::{build_schema, EmployeeSchema};

/// CORS policy for browser clients; `*` allows any origin
pub fn cors_layer(allow_origin: &str) -> Result<CorsLayer, ConfigError> {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    if allow_origin == "*" {
        return Ok(layer.allow_origin(Any));
    }

    let origin: HeaderValue = allow_origin
        .parse()
        .map_err(|_| ConfigError::InvalidValue("CORS_ALLOW_ORIGIN"))?;
    Ok(layer.allow_origin(origin))
}

/// Build the application router with its middleware stack
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    // Axum layers are applied in reverse order (last added = first executed)
    // Order: cors -> request id -> trace -> context -> logging -> handler
    create_router()
        .layer(axum::middleware::from_fn(middleware::logging_middleware))
        .layer(axum::middleware::from_fn(
            middleware::request_context_middleware,
        ))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::x_request_id()),
        )
        .layer(cors)
        .with_state(state)
}
