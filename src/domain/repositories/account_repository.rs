//! Repository trait for account data access.

use crate::domain::entities::{Account, AccountPatch, NewAccount};
use crate::error::StorageError;
use async_trait::async_trait;

/// Repository interface for the `Account` table.
///
/// Every method issues exactly one prepared statement.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MySqlAccountRepository`] - MySQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Inserts an account and returns the identifier assigned by the database.
    ///
    /// No deduplication happens here: inserting the same payload twice yields two rows.
    async fn create(&self, new_account: NewAccount) -> Result<u64, StorageError>;

    /// Finds the account matching both username and password.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Account))` if found
    /// - `Ok(None)` if no row matches
    async fn find_by_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<Account>, StorageError>;

    /// Sets the account status to `Created`. Returns the number of affected rows.
    async fn approve(&self, id: i64) -> Result<u64, StorageError>;

    /// Applies a partial update. Returns the number of affected rows.
    async fn update(&self, id: i64, patch: AccountPatch) -> Result<u64, StorageError>;

    /// Deletes an account by identifier. Returns the number of affected rows.
    async fn delete(&self, id: i64) -> Result<u64, StorageError>;

    /// Round-trips a trivial statement to check connectivity.
    async fn ping(&self) -> Result<(), StorageError>;
}
