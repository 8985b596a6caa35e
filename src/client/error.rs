//! Client Errors
//!
//! Every failure of a CRUD call collapses into one [`ClientError`] whose
//! `Display` is the message shown to the user.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// Non-success HTTP status
    #[error("HTTP error! status: {0}")]
    Status(u16),

    /// Application error list returned by the API
    #[error("GraphQL error: {}", .0.join(", "))]
    Graphql(Vec<String>),

    /// Connection, timeout or body decoding failure
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response without the expected payload
    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),
}
