//! Common test utilities

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};

use employee_registry::api::{self, AppState};
use employee_registry::MemoryRecordStore;

/// Router over a fresh in-memory store, with the full middleware stack
pub fn test_app() -> Router {
    let store = Arc::new(MemoryRecordStore::new());
    let cors = api::cors_layer("*").expect("wildcard CORS is valid");
    api::build_router(AppState::new(store), cors)
}

/// Serve a fresh app on an ephemeral port and return its GraphQL endpoint
pub async fn spawn_server() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Listener has an address");

    tokio::spawn(async move {
        axum::serve(
            listener,
            test_app().into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await
        .expect("Test server failed");
    });

    format!("http://{}/graphql", addr)
}

/// Build a GraphQL POST request
pub fn graphql_request(query: &str, variables: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/graphql")
        .header("content-type", "application/json")
        .body(Body::from(
            json!({ "query": query, "variables": variables }).to_string(),
        ))
        .unwrap()
}

/// Collect a response body as a string
pub async fn body_string(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Collect a response body as JSON
pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_str(&body_string(response).await).unwrap()
}

/// A valid creation input with a joining date in the future
pub fn employee_input() -> Value {
    json!({
        "firstName": "Hedy",
        "lastName": "Lamarr",
        "age": 30,
        "dateOfJoining": "2031-03-10",
        "title": "Director",
        "department": "Engineering",
        "employeeType": "FullTime"
    })
}

pub const EMPLOYEE_FIELDS: &str =
    "id firstName lastName age dateOfJoining title department employeeType currentStatus";
