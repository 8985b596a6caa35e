//! Record Store module
//!
//! Persistence seam for employee records: create, read one, read all,
//! restricted update and delete, all keyed by a store-assigned id.

mod error;
mod memory;
mod postgres;

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{EmployeeRecord, EmployeeUpdate, NewEmployee};

pub use error::StoreError;
pub use memory::MemoryRecordStore;
pub use postgres::PgRecordStore;

/// Shared handle to whichever store backs the API
pub type SharedStore = Arc<dyn RecordStore>;

/// Document store holding employee records.
///
/// Writes are last-write-wins; there is no locking or versioning.
#[async_trait]
pub trait RecordStore: Send + Sync + 'static {
    /// All records in creation order
    async fn list_all(&self) -> Result<Vec<EmployeeRecord>, StoreError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<EmployeeRecord>, StoreError>;

    /// Persist a new record under a fresh id
    async fn insert(&self, new: NewEmployee) -> Result<EmployeeRecord, StoreError>;

    /// Apply the present fields of `update`. `None` if the id is unknown.
    async fn update(
        &self,
        id: Uuid,
        update: EmployeeUpdate,
    ) -> Result<Option<EmployeeRecord>, StoreError>;

    /// Remove a record, returning it. `None` if the id is unknown.
    async fn delete(&self, id: Uuid) -> Result<Option<EmployeeRecord>, StoreError>;

    /// Check the backing storage is reachable
    async fn health(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
