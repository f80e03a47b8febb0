//! Capstone record management service.

use std::sync::Arc;

use crate::domain::entities::{Record, RecordFields, RecordFilter};
use crate::domain::repositories::RecordRepository;
use crate::error::{AppError, StorageError};

/// Service for creating, listing, searching, updating and deleting records.
pub struct RecordService {
    repository: Arc<dyn RecordRepository>,
}

impl RecordService {
    /// Creates a new record service.
    pub fn new(repository: Arc<dyn RecordRepository>) -> Self {
        Self { repository }
    }

    /// Inserts a record and returns its database-assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the insert fails at any step.
    pub async fn create_record(&self, fields: RecordFields) -> Result<u64, AppError> {
        let id = self.repository.create(fields).await?;
        tracing::info!(record_id = id, "Record created");
        Ok(id)
    }

    /// Returns every record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_records(&self) -> Result<Vec<Record>, AppError> {
        Ok(self.repository.list().await?)
    }

    /// Returns records matching the filter. An empty filter matches everything.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn search_records(&self, filter: RecordFilter) -> Result<Vec<Record>, AppError> {
        Ok(self.repository.search(filter).await?)
    }

    /// Replaces the writable columns of a record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update_record(&self, id: i64, fields: RecordFields) -> Result<(), AppError> {
        let affected = self.repository.update(id, fields).await?;
        tracing::info!(record_id = id, affected, "Record updated");
        Ok(())
    }

    /// Deletes a record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_record(&self, id: i64) -> Result<(), AppError> {
        let affected = self.repository.delete(id).await?;
        tracing::info!(record_id = id, affected, "Record deleted");
        Ok(())
    }

    /// Checks that the record store is reachable.
    pub async fn check_database(&self) -> Result<(), StorageError> {
        self.repository.ping().await
    }
}
