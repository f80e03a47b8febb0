#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use capstone_services::application::services::{AccountService, RecordService};
use capstone_services::domain::entities::{
    Account, AccountPatch, NewAccount, Record, RecordFields, RecordFilter,
};
use capstone_services::domain::repositories::{AccountRepository, RecordRepository};
use capstone_services::error::StorageError;
use capstone_services::routes::{account_router, record_router};
use capstone_services::state::{AccountState, RecordState};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Step at which a fake repository should fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailAt {
    Prepare,
    Execute,
}

impl FailAt {
    fn error(self) -> StorageError {
        match self {
            FailAt::Prepare => StorageError::Prepare(sqlx::Error::Protocol(
                "You have an error in your SQL syntax".to_string(),
            )),
            FailAt::Execute => StorageError::Execute(sqlx::Error::Protocol(
                "Duplicate entry for key 'PRIMARY'".to_string(),
            )),
        }
    }
}

/// In-memory stand-in for the `Account` table.
#[derive(Default)]
pub struct InMemoryAccountRepository {
    rows: Mutex<Vec<Account>>,
    next_id: Mutex<i64>,
    fail_at: Mutex<Option<FailAt>>,
    calls: AtomicUsize,
}

impl InMemoryAccountRepository {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn failing(step: FailAt) -> Arc<Self> {
        let repo = Self::default();
        *repo.fail_at.lock().unwrap() = Some(step);
        Arc::new(repo)
    }

    pub fn seed(&self, username: &str, password: &str, acc_type: &str, acc_status: &str) -> i64 {
        let id = self.allocate_id();
        self.rows.lock().unwrap().push(Account::new(
            id,
            username.to_string(),
            password.to_string(),
            acc_type.to_string(),
            acc_status.to_string(),
        ));
        id
    }

    pub fn rows(&self) -> Vec<Account> {
        self.rows.lock().unwrap().clone()
    }

    pub fn get(&self, id: i64) -> Option<Account> {
        self.rows().into_iter().find(|a| a.id == id)
    }

    /// Number of statements the handlers attempted.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn allocate_id(&self) -> i64 {
        let mut next = self.next_id.lock().unwrap();
        *next += 1;
        *next
    }

    fn begin(&self) -> Result<(), StorageError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match *self.fail_at.lock().unwrap() {
            Some(step) => Err(step.error()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn create(&self, new_account: NewAccount) -> Result<u64, StorageError> {
        self.begin()?;
        let id = self.allocate_id();
        self.rows.lock().unwrap().push(Account::new(
            id,
            new_account.username,
            new_account.password,
            new_account.acc_type,
            new_account.acc_status,
        ));
        Ok(id as u64)
    }

    async fn find_by_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<Account>, StorageError> {
        self.begin()?;
        Ok(self
            .rows()
            .into_iter()
            .find(|a| a.username == username && a.password == password))
    }

    async fn approve(&self, id: i64) -> Result<u64, StorageError> {
        self.begin()?;
        let mut rows = self.rows.lock().unwrap();
        let mut affected = 0;
        for account in rows.iter_mut().filter(|a| a.id == id) {
            if account.acc_status != "Created" {
                account.acc_status = "Created".to_string();
                affected += 1;
            }
        }
        Ok(affected)
    }

    async fn update(&self, id: i64, patch: AccountPatch) -> Result<u64, StorageError> {
        self.begin()?;
        let mut rows = self.rows.lock().unwrap();
        let mut affected = 0;
        for account in rows.iter_mut().filter(|a| a.id == id) {
            if let Some(username) = &patch.username {
                account.username = username.clone();
            }
            if let Some(password) = &patch.password {
                account.password = password.clone();
            }
            if let Some(acc_type) = &patch.acc_type {
                account.acc_type = acc_type.clone();
            }
            affected += 1;
        }
        Ok(affected)
    }

    async fn delete(&self, id: i64) -> Result<u64, StorageError> {
        self.begin()?;
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|a| a.id != id);
        Ok((before - rows.len()) as u64)
    }

    async fn ping(&self) -> Result<(), StorageError> {
        self.begin()
    }
}

/// In-memory stand-in for the `Record` table.
#[derive(Default)]
pub struct InMemoryRecordRepository {
    rows: Mutex<Vec<Record>>,
    next_id: Mutex<i64>,
    fail_at: Mutex<Option<FailAt>>,
    calls: AtomicUsize,
}

impl InMemoryRecordRepository {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn failing(step: FailAt) -> Arc<Self> {
        let repo = Self::default();
        *repo.fail_at.lock().unwrap() = Some(step);
        Arc::new(repo)
    }

    pub fn seed(&self, fields: RecordFields) -> i64 {
        let mut next = self.next_id.lock().unwrap();
        *next += 1;
        self.rows.lock().unwrap().push(Record::new(*next, fields));
        *next
    }

    pub fn rows(&self) -> Vec<Record> {
        self.rows.lock().unwrap().clone()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn begin(&self) -> Result<(), StorageError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match *self.fail_at.lock().unwrap() {
            Some(step) => Err(step.error()),
            None => Ok(()),
        }
    }
}

fn matches(record: &Record, filter: &RecordFilter) -> bool {
    let f = &record.fields;
    let year_ok = filter.acad_yr.as_ref().is_none_or(|y| &f.acad_yr == y);
    let keyword_ok = filter.keyword.as_ref().is_none_or(|k| {
        [&f.name, &f.capstone_title, &f.company_name, &f.proj_desc]
            .iter()
            .any(|v| v.contains(k.as_str()))
    });
    year_ok && keyword_ok
}

#[async_trait]
impl RecordRepository for InMemoryRecordRepository {
    async fn create(&self, fields: RecordFields) -> Result<u64, StorageError> {
        self.begin()?;
        Ok(self.seed(fields) as u64)
    }

    async fn list(&self) -> Result<Vec<Record>, StorageError> {
        self.begin()?;
        Ok(self.rows())
    }

    async fn search(&self, filter: RecordFilter) -> Result<Vec<Record>, StorageError> {
        self.begin()?;
        Ok(self
            .rows()
            .into_iter()
            .filter(|r| matches(r, &filter))
            .collect())
    }

    async fn update(&self, id: i64, fields: RecordFields) -> Result<u64, StorageError> {
        self.begin()?;
        let mut rows = self.rows.lock().unwrap();
        let mut affected = 0;
        for record in rows.iter_mut().filter(|r| r.id == id) {
            record.fields = fields.clone();
            affected += 1;
        }
        Ok(affected)
    }

    async fn delete(&self, id: i64) -> Result<u64, StorageError> {
        self.begin()?;
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|r| r.id != id);
        Ok((before - rows.len()) as u64)
    }

    async fn ping(&self) -> Result<(), StorageError> {
        self.begin()
    }
}

pub fn sample_fields(title: &str, acad_yr: &str) -> RecordFields {
    RecordFields {
        name: "Alice Tan".to_string(),
        role_of_contact: "Lecturer".to_string(),
        no_of_students: 4,
        acad_yr: acad_yr.to_string(),
        capstone_title: title.to_string(),
        company_name: "ACME Pte Ltd".to_string(),
        company_contact: "bob@acme.test".to_string(),
        proj_desc: "Sensor dashboard for campus facilities".to_string(),
    }
}

pub fn account_server(repo: Arc<InMemoryAccountRepository>) -> TestServer {
    let state = AccountState::new(Arc::new(AccountService::new(repo)));
    TestServer::new(account_router(state)).unwrap()
}

pub fn record_server(repo: Arc<InMemoryRecordRepository>) -> TestServer {
    let state = RecordState::new(Arc::new(RecordService::new(repo)));
    TestServer::new(record_router(state)).unwrap()
}
