//! Repository trait for capstone record data access.

use crate::domain::entities::{Record, RecordFields, RecordFilter};
use crate::error::StorageError;
use async_trait::async_trait;

/// Repository interface for the `Record` table.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MySqlRecordRepository`] - MySQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordRepository: Send + Sync {
    /// Inserts a record and returns the identifier assigned by the database.
    async fn create(&self, fields: RecordFields) -> Result<u64, StorageError>;

    /// Returns every record.
    async fn list(&self) -> Result<Vec<Record>, StorageError>;

    /// Returns records matching the filter.
    async fn search(&self, filter: RecordFilter) -> Result<Vec<Record>, StorageError>;

    /// Replaces all writable columns of a record. Returns the number of affected rows.
    async fn update(&self, id: i64, fields: RecordFields) -> Result<u64, StorageError>;

    /// Deletes a record by identifier. Returns the number of affected rows.
    async fn delete(&self, id: i64) -> Result<u64, StorageError>;

    /// Round-trips a trivial statement to check connectivity.
    async fn ping(&self) -> Result<(), StorageError>;
}
