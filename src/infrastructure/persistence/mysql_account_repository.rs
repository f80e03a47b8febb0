//! MySQL implementation of the account repository.

use async_trait::async_trait;
use sqlx::{FromRow, MySqlPool, Statement};
use std::sync::Arc;

use super::{acquire, ping, prepare};
use crate::domain::entities::{Account, AccountPatch, NewAccount};
use crate::domain::repositories::AccountRepository;
use crate::error::StorageError;

const INSERT_ACCOUNT: &str =
    "INSERT INTO Account (Username, Password, AccType, AccStatus) VALUES (?, ?, ?, ?)";

const SELECT_BY_CREDENTIALS: &str = "SELECT AccID, Username, Password, AccType, AccStatus \
     FROM Account WHERE Username = ? AND Password = ?";

const APPROVE_ACCOUNT: &str = "UPDATE Account SET AccStatus = 'Created' WHERE AccID = ?";

const UPDATE_ACCOUNT: &str = "UPDATE Account SET \
     Username = COALESCE(?, Username), \
     Password = COALESCE(?, Password), \
     AccType = COALESCE(?, AccType) \
     WHERE AccID = ?";

const DELETE_ACCOUNT: &str = "DELETE FROM Account WHERE AccID = ?";

#[derive(FromRow)]
struct AccountRow {
    #[sqlx(rename = "AccID")]
    acc_id: i64,
    #[sqlx(rename = "Username")]
    username: String,
    #[sqlx(rename = "Password")]
    password: String,
    #[sqlx(rename = "AccType")]
    acc_type: String,
    #[sqlx(rename = "AccStatus")]
    acc_status: String,
}

impl From<AccountRow> for Account {
    fn from(row: AccountRow) -> Self {
        Account::new(
            row.acc_id,
            row.username,
            row.password,
            row.acc_type,
            row.acc_status,
        )
    }
}

/// MySQL repository for the `Account` table.
///
/// Uses SQLx prepared statements for SQL injection protection.
pub struct MySqlAccountRepository {
    pool: Arc<MySqlPool>,
}

impl MySqlAccountRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<MySqlPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccountRepository for MySqlAccountRepository {
    async fn create(&self, new_account: NewAccount) -> Result<u64, StorageError> {
        let mut conn = acquire(&self.pool).await?;
        let statement = prepare(&mut conn, INSERT_ACCOUNT).await?;

        let result = statement
            .query()
            .bind(new_account.username)
            .bind(new_account.password)
            .bind(new_account.acc_type)
            .bind(new_account.acc_status)
            .execute(&mut *conn)
            .await
            .map_err(StorageError::Execute)?;

        Ok(result.last_insert_id())
    }

    async fn find_by_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<Account>, StorageError> {
        let mut conn = acquire(&self.pool).await?;
        let statement = prepare(&mut conn, SELECT_BY_CREDENTIALS).await?;

        let row = statement
            .query_as::<AccountRow>()
            .bind(username)
            .bind(password)
            .fetch_optional(&mut *conn)
            .await
            .map_err(StorageError::Execute)?;

        Ok(row.map(Account::from))
    }

    async fn approve(&self, id: i64) -> Result<u64, StorageError> {
        let mut conn = acquire(&self.pool).await?;
        let statement = prepare(&mut conn, APPROVE_ACCOUNT).await?;

        let result = statement
            .query()
            .bind(id)
            .execute(&mut *conn)
            .await
            .map_err(StorageError::Execute)?;

        Ok(result.rows_affected())
    }

    async fn update(&self, id: i64, patch: AccountPatch) -> Result<u64, StorageError> {
        let mut conn = acquire(&self.pool).await?;
        let statement = prepare(&mut conn, UPDATE_ACCOUNT).await?;

        let result = statement
            .query()
            .bind(patch.username)
            .bind(patch.password)
            .bind(patch.acc_type)
            .bind(id)
            .execute(&mut *conn)
            .await
            .map_err(StorageError::Execute)?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i64) -> Result<u64, StorageError> {
        let mut conn = acquire(&self.pool).await?;
        let statement = prepare(&mut conn, DELETE_ACCOUNT).await?;

        let result = statement
            .query()
            .bind(id)
            .execute(&mut *conn)
            .await
            .map_err(StorageError::Execute)?;

        Ok(result.rows_affected())
    }

    async fn ping(&self) -> Result<(), StorageError> {
        ping(&self.pool).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placeholders(sql: &str) -> usize {
        sql.matches('?').count()
    }

    #[test]
    fn test_statement_placeholders() {
        assert_eq!(placeholders(INSERT_ACCOUNT), 4);
        assert_eq!(placeholders(SELECT_BY_CREDENTIALS), 2);
        assert_eq!(placeholders(APPROVE_ACCOUNT), 1);
        assert_eq!(placeholders(UPDATE_ACCOUNT), 4);
        assert_eq!(placeholders(DELETE_ACCOUNT), 1);
    }

    #[test]
    fn test_row_conversion() {
        let row = AccountRow {
            acc_id: 7,
            username: "testacc".to_string(),
            password: "testpwd".to_string(),
            acc_type: "User".to_string(),
            acc_status: "Pending".to_string(),
        };

        let account = Account::from(row);

        assert_eq!(account.id, 7);
        assert_eq!(account.acc_status, "Pending");
    }
}
