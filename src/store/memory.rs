//! In-memory Record Store
//!
//! Same semantics as the PostgreSQL store, kept in a vector so list order is
//! creation order. Used by tests and database-free runs.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::{EmployeeRecord, EmployeeUpdate, NewEmployee};

use super::{RecordStore, StoreError};

#[derive(Debug, Default)]
pub struct MemoryRecordStore {
    records: RwLock<Vec<EmployeeRecord>>,
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with existing records, keeping their ids
    pub fn with_records(records: Vec<EmployeeRecord>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    async fn list_all(&self) -> Result<Vec<EmployeeRecord>, StoreError> {
        Ok(self.records.read().await.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<EmployeeRecord>, StoreError> {
        let records = self.records.read().await;
        Ok(records.iter().find(|r| r.id == id).cloned())
    }

    async fn insert(&self, new: NewEmployee) -> Result<EmployeeRecord, StoreError> {
        let record = EmployeeRecord::from_new(Uuid::new_v4(), new);
        self.records.write().await.push(record.clone());
        Ok(record)
    }

    async fn update(
        &self,
        id: Uuid,
        update: EmployeeUpdate,
    ) -> Result<Option<EmployeeRecord>, StoreError> {
        let mut records = self.records.write().await;
        let Some(slot) = records.iter_mut().find(|r| r.id == id) else {
            return Ok(None);
        };

        *slot = slot.clone().apply(&update);
        Ok(Some(slot.clone()))
    }

    async fn delete(&self, id: Uuid) -> Result<Option<EmployeeRecord>, StoreError> {
        let mut records = self.records.write().await;
        let position = records.iter().position(|r| r.id == id);
        Ok(position.map(|index| records.remove(index)))
    }
}
