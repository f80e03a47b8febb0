//! MySQL implementation of the capstone record repository.

use async_trait::async_trait;
use sqlx::{FromRow, MySqlPool, Statement};
use std::sync::Arc;

use super::{acquire, ping, prepare};
use crate::domain::entities::{Record, RecordFields, RecordFilter};
use crate::domain::repositories::RecordRepository;
use crate::error::StorageError;
use crate::utils::like_pattern::like_pattern;

const INSERT_RECORD: &str = "INSERT INTO Record \
     (Name, RoleOfContact, NoOfStudents, AcadYr, CapstoneTitle, CompanyName, CompanyContact, ProjDesc) \
     VALUES (?, ?, ?, ?, ?, ?, ?, ?)";

const SELECT_ALL_RECORDS: &str = "SELECT RecordID, Name, RoleOfContact, NoOfStudents, AcadYr, \
     CapstoneTitle, CompanyName, CompanyContact, ProjDesc FROM Record";

const SEARCH_RECORDS: &str = "SELECT RecordID, Name, RoleOfContact, NoOfStudents, AcadYr, \
     CapstoneTitle, CompanyName, CompanyContact, ProjDesc FROM Record \
     WHERE (? IS NULL OR AcadYr = ?) \
     AND (? IS NULL OR Name LIKE ? OR CapstoneTitle LIKE ? OR CompanyName LIKE ? OR ProjDesc LIKE ?)";

const UPDATE_RECORD: &str = "UPDATE Record SET \
     Name = ?, RoleOfContact = ?, NoOfStudents = ?, AcadYr = ?, \
     CapstoneTitle = ?, CompanyName = ?, CompanyContact = ?, ProjDesc = ? \
     WHERE RecordID = ?";

const DELETE_RECORD: &str = "DELETE FROM Record WHERE RecordID = ?";

#[derive(FromRow)]
#[sqlx(rename_all = "PascalCase")]
struct RecordRow {
    #[sqlx(rename = "RecordID")]
    record_id: i64,
    name: String,
    role_of_contact: String,
    no_of_students: i32,
    acad_yr: String,
    capstone_title: String,
    company_name: String,
    company_contact: String,
    proj_desc: String,
}

impl From<RecordRow> for Record {
    fn from(row: RecordRow) -> Self {
        Record::new(
            row.record_id,
            RecordFields {
                name: row.name,
                role_of_contact: row.role_of_contact,
                no_of_students: row.no_of_students,
                acad_yr: row.acad_yr,
                capstone_title: row.capstone_title,
                company_name: row.company_name,
                company_contact: row.company_contact,
                proj_desc: row.proj_desc,
            },
        )
    }
}

/// MySQL repository for the `Record` table.
pub struct MySqlRecordRepository {
    pool: Arc<MySqlPool>,
}

impl MySqlRecordRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<MySqlPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecordRepository for MySqlRecordRepository {
    async fn create(&self, fields: RecordFields) -> Result<u64, StorageError> {
        let mut conn = acquire(&self.pool).await?;
        let statement = prepare(&mut conn, INSERT_RECORD).await?;

        let result = statement
            .query()
            .bind(fields.name)
            .bind(fields.role_of_contact)
            .bind(fields.no_of_students)
            .bind(fields.acad_yr)
            .bind(fields.capstone_title)
            .bind(fields.company_name)
            .bind(fields.company_contact)
            .bind(fields.proj_desc)
            .execute(&mut *conn)
            .await
            .map_err(StorageError::Execute)?;

        Ok(result.last_insert_id())
    }

    async fn list(&self) -> Result<Vec<Record>, StorageError> {
        let mut conn = acquire(&self.pool).await?;
        let statement = prepare(&mut conn, SELECT_ALL_RECORDS).await?;

        let rows = statement
            .query_as::<RecordRow>()
            .fetch_all(&mut *conn)
            .await
            .map_err(StorageError::Execute)?;

        Ok(rows.into_iter().map(Record::from).collect())
    }

    async fn search(&self, filter: RecordFilter) -> Result<Vec<Record>, StorageError> {
        let acad_yr = filter.acad_yr.as_deref();
        let pattern = filter.keyword.as_deref().map(like_pattern);
        let pattern = pattern.as_deref();

        let mut conn = acquire(&self.pool).await?;
        let statement = prepare(&mut conn, SEARCH_RECORDS).await?;

        let rows = statement
            .query_as::<RecordRow>()
            .bind(acad_yr)
            .bind(acad_yr)
            .bind(pattern)
            .bind(pattern)
            .bind(pattern)
            .bind(pattern)
            .bind(pattern)
            .fetch_all(&mut *conn)
            .await
            .map_err(StorageError::Execute)?;

        Ok(rows.into_iter().map(Record::from).collect())
    }

    async fn update(&self, id: i64, fields: RecordFields) -> Result<u64, StorageError> {
        let mut conn = acquire(&self.pool).await?;
        let statement = prepare(&mut conn, UPDATE_RECORD).await?;

        let result = statement
            .query()
            .bind(fields.name)
            .bind(fields.role_of_contact)
            .bind(fields.no_of_students)
            .bind(fields.acad_yr)
            .bind(fields.capstone_title)
            .bind(fields.company_name)
            .bind(fields.company_contact)
            .bind(fields.proj_desc)
            .bind(id)
            .execute(&mut *conn)
            .await
            .map_err(StorageError::Execute)?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i64) -> Result<u64, StorageError> {
        let mut conn = acquire(&self.pool).await?;
        let statement = prepare(&mut conn, DELETE_RECORD).await?;

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
