//! Domain Error Types
//!
//! Pure domain errors that don't depend on infrastructure.

use thiserror::Error;

/// Errors raised while turning wire values into domain values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unknown title: {0}")]
    UnknownTitle(String),

    #[error("Unknown department: {0}")]
    UnknownDepartment(String),

    #[error("Unknown employee type: {0}")]
    UnknownEmployeeType(String),

    /// Date not in `YYYY-MM-DD` form, or not a calendar date
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Required input object left out of the request
    #[error("Missing required input: {0}")]
    MissingInput(&'static str),

    /// Identifier that is not a record id
    #[error("Invalid employee id: {0}")]
    InvalidId(String),

    /// Deletion of an employee whose status is still active
    #[error("Can't Delete Employee - Status Active!")]
    DeletionRefused,
}
