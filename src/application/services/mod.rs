//! Business logic services for the application layer.

pub mod account_service;
pub mod record_service;

pub use account_service::AccountService;
pub use record_service::RecordService;
