//! Error handling module
//!
//! Centralized error types, HTTP response conversion and GraphQL error
//! conversion.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::domain::DomainError;
use crate::store::StoreError;

/// Application-wide Result type
pub type AppResult<T> = Result<T, AppError>;

/// Application error types
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Client errors (4xx)
    #[error(transparent)]
    Domain(#[from] DomainError),

    // Server errors (5xx)
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub error_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl AppError {
    /// Status code, machine-readable code and client-safe details
    fn classify(&self) -> (StatusCode, &'static str, Option<String>) {
        match self {
            AppError::Domain(domain_err) => match domain_err {
                DomainError::DeletionRefused => (
                    StatusCode::CONFLICT,
                    "deletion_refused",
                    Some(domain_err.to_string()),
                ),
                _ => (
                    StatusCode::BAD_REQUEST,
                    "invalid_input",
                    Some(domain_err.to_string()),
                ),
            },

            AppError::Store(e) if e.is_connection_error() => {
                tracing::error!("Store unavailable: {:?}", e);
                (StatusCode::SERVICE_UNAVAILABLE, "store_unavailable", None)
            }
            AppError::Store(e) => {
                tracing::error!("Store error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "store_error", None)
            }
        }
    }

    /// Convert into a GraphQL error for a resolver performing `action`.
    ///
    /// Input errors keep their own message. Store failures are logged and
    /// reported only as the failed action, e.g. `Error creating employee`.
    pub fn into_graphql(self, action: &str) -> async_graphql::Error {
        match self {
            AppError::Domain(e) => async_graphql::Error::new(e.to_string()),
            AppError::Store(e) => {
                tracing::error!("{}: {:?}", action, e);
                async_graphql::Error::new(action)
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_code, details) = self.classify();

        let body = ErrorResponse {
            error: self.to_string(),
            error_code: error_code.to_string(),
            details,
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_errors_map_to_client_statuses() {
        let (status, code, details) =
            AppError::Domain(DomainError::InvalidId("abc".to_string())).classify();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(code, "invalid_input");
        assert!(details.unwrap().contains("abc"));

        let (status, code, _) = AppError::Domain(DomainError::DeletionRefused).classify();
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(code, "deletion_refused");
    }

    #[test]
    fn test_store_errors_hide_details() {
        let (status, code, details) =
            AppError::Store(StoreError::Database(sqlx::Error::PoolTimedOut)).classify();
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(code, "store_unavailable");
        assert!(details.is_none());

        let response =
            AppError::Store(StoreError::Database(sqlx::Error::RowNotFound)).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_graphql_conversion() {
        let err = AppError::Store(StoreError::Database(sqlx::Error::PoolClosed))
            .into_graphql("Error creating employee");
        assert_eq!(err.message, "Error creating employee");

        let err = AppError::Domain(DomainError::UnknownTitle("Intern".to_string()))
            .into_graphql("Error creating employee");
        assert_eq!(err.message, "Unknown title: Intern");
    }
}
