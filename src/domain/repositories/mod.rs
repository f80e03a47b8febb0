//! Repository trait definitions for the domain layer.
//!
//! These traits are the capability interface handlers reach the database
//! through. Concrete implementations live in `crate::infrastructure::persistence`;
//! mock implementations are auto-generated via `mockall` for unit tests, and the
//! integration tests in `tests/` provide in-memory fakes.
//!
//! # Available Repositories
//!
//! - [`AccountRepository`] - Account CRUD operations
//! - [`RecordRepository`] - Capstone record CRUD and search

pub mod account_repository;
pub mod record_repository;

pub use account_repository::AccountRepository;
pub use record_repository::RecordRepository;

#[cfg(test)]
pub use account_repository::MockAccountRepository;
#[cfg(test)]
pub use record_repository::MockRecordRepository;
