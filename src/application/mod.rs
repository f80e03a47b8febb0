//! Application layer services.
//!
//! Services consume repository traits and give HTTP handlers and the admin
//! CLI a single place for input rules and error classification.
//!
//! # Available Services
//!
//! - [`services::account_service::AccountService`] - Account lifecycle
//! - [`services::record_service::RecordService`] - Capstone record management

pub mod services;
