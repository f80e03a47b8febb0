//! Account lifecycle service.

use std::sync::Arc;

use crate::domain::entities::{Account, AccountPatch, NewAccount};
use crate::domain::repositories::AccountRepository;
use crate::error::{AppError, StorageError};

/// Message returned when a credential lookup is missing either parameter.
pub const CREDENTIALS_REQUIRED_MESSAGE: &str = "Username and Password parameters are required";

/// Service for creating, looking up, approving, updating and deleting accounts.
///
/// Each operation maps to exactly one repository call; storage failures are
/// converted to [`AppError::Internal`] without retry.
pub struct AccountService {
    repository: Arc<dyn AccountRepository>,
}

impl AccountService {
    /// Creates a new account service.
    pub fn new(repository: Arc<dyn AccountRepository>) -> Self {
        Self { repository }
    }

    /// Inserts an account and returns its database-assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the insert fails at any step.
    pub async fn create_account(&self, new_account: NewAccount) -> Result<u64, AppError> {
        let id = self.repository.create(new_account).await?;
        tracing::info!(acc_id = id, "Account created");
        Ok(id)
    }

    /// Looks up the account matching both credentials.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if either value is missing or empty; the
    /// repository is not called in that case.
    /// Returns [`AppError::NotFound`] if no account matches.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn find_by_credentials(
        &self,
        username: Option<&str>,
        password: Option<&str>,
    ) -> Result<Account, AppError> {
        let (Some(username), Some(password)) = (
            username.filter(|v| !v.is_empty()),
            password.filter(|v| !v.is_empty()),
        ) else {
            return Err(AppError::bad_request(CREDENTIALS_REQUIRED_MESSAGE));
        };

        match self
            .repository
            .find_by_credentials(username, password)
            .await
        {
            Ok(Some(account)) => Ok(account),
            Ok(None) => Err(AppError::not_found("Account not found")),
            Err(e) => Err(e.into()),
        }
    }

    /// Moves an account to the `Created` status.
    ///
    /// Succeeds even when no row matched; the statement itself is the unit of work.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn approve_account(&self, id: i64) -> Result<(), AppError> {
        let affected = self.repository.approve(id).await?;
        tracing::info!(acc_id = id, affected, "Account approved");
        Ok(())
    }

    /// Applies a partial update to an account.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the patch carries no fields.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update_account(&self, id: i64, patch: AccountPatch) -> Result<(), AppError> {
        if patch.is_empty() {
            return Err(AppError::bad_request("No account fields to update"));
        }

        let affected = self.repository.update(id, patch).await?;
        tracing::info!(acc_id = id, affected, "Account updated");
        Ok(())
    }

    /// Deletes an account.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_account(&self, id: i64) -> Result<(), AppError> {
        let affected = self.repository.delete(id).await?;
        tracing::info!(acc_id = id, affected, "Account deleted");
        Ok(())
    }

    /// Checks that the account store is reachable.
    pub async fn check_database(&self) -> Result<(), StorageError> {
        self.repository.ping().await
    }
}
