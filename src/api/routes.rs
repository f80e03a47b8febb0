//! API route configuration.
//!
//! Paths are relative to the `/api/v1` prefix applied in [`crate::routes`].

use crate::api::handlers::{
    admin_create_account_handler, approve_account_handler, create_account_handler,
    create_record_handler, delete_account_handler, delete_record_handler, get_account_handler,
    list_records_handler, search_records_handler, update_account_handler, update_record_handler,
};
use crate::state::{AccountState, RecordState};
use axum::{
    Router,
    routing::{delete, get, post, put},
};

/// Account service routes.
///
/// # Endpoints
///
/// - `POST   /accounts`          - Self-service registration (status `Pending`)
/// - `GET    /accounts`          - Look up by `username` and `password`
/// - `POST   /accounts/admin`    - Operator creation (status `Created`)
/// - `POST   /accounts/approve`  - Approve by `accID`
/// - `DELETE /accounts/delete`   - Delete by `accID`
/// - `PUT    /accounts/{accID}`  - Partial update
pub fn account_routes() -> Router<AccountState> {
    Router::new()
        .route(
            "/accounts",
            post(create_account_handler).get(get_account_handler),
        )
        .route("/accounts/admin", post(admin_create_account_handler))
        .route("/accounts/approve", post(approve_account_handler))
        .route("/accounts/delete", delete(delete_account_handler))
        .route("/accounts/{acc_id}", put(update_account_handler))
}

/// Record service routes.
///
/// # Endpoints
///
/// - `POST   /records`             - Create a record
/// - `GET    /records`             - List all records
/// - `GET    /records/all`         - List all records
/// - `GET    /records/search`      - Filter by `acadYr` and `keyword`
/// - `DELETE /records/delete`      - Delete by `recordID`
/// - `PUT    /records/{recordID}`  - Replace a record
pub fn record_routes() -> Router<RecordState> {
    Router::new()
        .route(
            "/records",
            post(create_record_handler).get(list_records_handler),
        )
        .route("/records/all", get(list_records_handler))
        .route("/records/search", get(search_records_handler))
        .route("/records/delete", delete(delete_record_handler))
        .route("/records/{record_id}", put(update_record_handler))
}
