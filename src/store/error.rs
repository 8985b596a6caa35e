//! Record Store Errors

use uuid::Uuid;

use crate::domain::DomainError;

/// Errors that can occur in the record store
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A stored row no longer maps onto the domain vocabulary
    #[error("Corrupt employee record {id}: {source}")]
    CorruptRecord {
        id: Uuid,
        #[source]
        source: DomainError,
    },
}

impl StoreError {
    /// Check if the backing database is unreachable rather than the data being bad
    pub fn is_connection_error(&self) -> bool {
        matches!(
            self,
            StoreError::Database(sqlx::Error::PoolTimedOut)
                | StoreError::Database(sqlx::Error::PoolClosed)
                | StoreError::Database(sqlx::Error::Io(_))
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_errors() {
        assert!(StoreError::Database(sqlx::Error::PoolTimedOut).is_connection_error());
        assert!(!StoreError::Database(sqlx::Error::RowNotFound).is_connection_error());

        let corrupt = StoreError::CorruptRecord {
            id: Uuid::nil(),
            source: DomainError::UnknownTitle("Intern".to_string()),
        };
        assert!(!corrupt.is_connection_error());
        assert!(corrupt.to_string().contains("Intern"));
    }
}
