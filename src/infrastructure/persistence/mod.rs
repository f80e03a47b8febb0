//! MySQL repository implementations.
//!
//! Each repository method acquires one pooled connection, prepares its
//! statement on it and executes it once. Connection pooling and the
//! per-connection statement cache are left to SQLx.
//!
//! # Repositories
//!
//! - [`MySqlAccountRepository`] - Account storage and credential lookup
//! - [`MySqlRecordRepository`] - Capstone record storage and search

pub mod mysql_account_repository;
pub mod mysql_record_repository;

pub use mysql_account_repository::MySqlAccountRepository;
pub use mysql_record_repository::MySqlRecordRepository;

use sqlx::mysql::MySqlStatement;
use sqlx::pool::PoolConnection;
use sqlx::{Executor, MySql, MySqlConnection, MySqlPool, Statement};

use crate::error::StorageError;

/// Connectivity check used by the health endpoints and `admin db check`.
const PING: &str = "SELECT 1";

async fn acquire(pool: &MySqlPool) -> Result<PoolConnection<MySql>, StorageError> {
    pool.acquire().await.map_err(StorageError::Acquire)
}

async fn prepare<'q>(
    conn: &mut MySqlConnection,
    sql: &'q str,
) -> Result<MySqlStatement<'q>, StorageError> {
    (&mut *conn)
        .prepare(sql)
        .await
        .map_err(StorageError::Prepare)
}

async fn ping(pool: &MySqlPool) -> Result<(), StorageError> {
    let mut conn = acquire(pool).await?;
    let statement = prepare(&mut conn, PING).await?;

    statement
        .query()
        .execute(&mut *conn)
        .await
        .map_err(StorageError::Execute)?;

    Ok(())
}
