//! Employee Registry Library
//!
//! Re-exports modules for integration testing and external use.

pub mod api;
pub mod client;
pub mod domain;
pub mod store;

pub mod config;
pub mod db;
mod error;

pub use config::{Config, StoreBackend};
pub use domain::{DomainError, EmployeeRecord, EmployeeUpdate, NewEmployee};
pub use error::{AppError, AppResult};
pub use store::{MemoryRecordStore, PgRecordStore, RecordStore, SharedStore};
