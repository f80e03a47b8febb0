//! HTTP request handlers for both services.
//!
//! Mutation endpoints answer with a single plain-text line, read endpoints
//! with JSON.

pub mod accounts;
pub mod health;
pub mod records;

pub use accounts::{
    admin_create_account_handler, approve_account_handler, create_account_handler,
    delete_account_handler, get_account_handler, update_account_handler,
};
pub use health::health_handler;
pub use records::{
    create_record_handler, delete_record_handler, list_records_handler, search_records_handler,
    update_record_handler,
};

use axum::http::StatusCode;

/// Plain-text confirmation terminated by a newline.
pub(crate) fn plain_text(status: StatusCode, message: &str) -> (StatusCode, String) {
    (status, format!("{message}\n"))
}
