//! Shared state injected into each service's handlers.

use std::sync::Arc;

use async_trait::async_trait;

use crate::application::services::{AccountService, RecordService};
use crate::error::StorageError;

/// State of the account service router.
#[derive(Clone)]
pub struct AccountState {
    pub account_service: Arc<AccountService>,
}

impl AccountState {
    pub fn new(account_service: Arc<AccountService>) -> Self {
        Self { account_service }
    }
}

/// State of the record service router.
#[derive(Clone)]
pub struct RecordState {
    pub record_service: Arc<RecordService>,
}

impl RecordState {
    pub fn new(record_service: Arc<RecordService>) -> Self {
        Self { record_service }
    }
}

/// Dependencies a service exposes to the shared health endpoint.
#[async_trait]
pub trait HealthCheck: Clone + Send + Sync + 'static {
    /// Name reported in the health response, e.g. `"account"`.
    fn service_name(&self) -> &'static str;

    /// Round-trips the database handle.
    async fn check_database(&self) -> Result<(), StorageError>;
}

#[async_trait]
impl HealthCheck for AccountState {
    fn service_name(&self) -> &'static str {
        "account"
    }

    async fn check_database(&self) -> Result<(), StorageError> {
        self.account_service.check_database().await
    }
}

#[async_trait]
impl HealthCheck for RecordState {
    fn service_name(&self) -> &'static str {
        "record"
    }

    async fn check_database(&self) -> Result<(), StorageError> {
        self.record_service.check_database().await
    }
}
