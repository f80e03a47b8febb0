//! Handlers for account endpoints.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
};

use super::plain_text;
use crate::api::dto::account::{
    AccountIdQuery, AccountResponse, CreateAccountRequest, CredentialsQuery, UpdateAccountRequest,
};
use crate::api::extract::{JsonPayload, PathParam, QueryParams};
use crate::domain::entities::account::{STATUS_CREATED, STATUS_PENDING};
use crate::error::AppError;
use crate::state::AccountState;
use crate::utils::identifier::parse_required_id;

const ACCOUNT_ID: &str = "Account ID";

/// Self-service account registration.
///
/// # Endpoint
///
/// `POST /api/v1/accounts`
///
/// # Request Body
///
/// ```json
/// {
///   "username": "testacc",
///   "password": "testpwd",
///   "accType": "User",       // optional, default "User"
///   "accStatus": "Pending"   // optional, default "Pending"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 if the body cannot be decoded.
/// Returns 500 if the insert fails.
pub async fn create_account_handler(
    State(state): State<AccountState>,
    JsonPayload(payload): JsonPayload<CreateAccountRequest>,
) -> Result<(StatusCode, String), AppError> {
    state
        .account_service
        .create_account(payload.into_new_account(STATUS_PENDING))
        .await?;

    Ok(plain_text(StatusCode::CREATED, "Account created successfully"))
}

/// Operator-initiated account creation.
///
/// # Endpoint
///
/// `POST /api/v1/accounts/admin`
///
/// Same contract as [`create_account_handler`], but an absent `accStatus`
/// defaults to `Created` so the account needs no approval.
pub async fn admin_create_account_handler(
    State(state): State<AccountState>,
    JsonPayload(payload): JsonPayload<CreateAccountRequest>,
) -> Result<(StatusCode, String), AppError> {
    state
        .account_service
        .create_account(payload.into_new_account(STATUS_CREATED))
        .await?;

    Ok(plain_text(StatusCode::CREATED, "Account created successfully"))
}

/// Looks up an account by credentials.
///
/// # Endpoint
///
/// `GET /api/v1/accounts?username=...&password=...`
///
/// # Errors
///
/// Returns 400 if either parameter is missing or empty.
/// Returns 404 if no account matches.
/// Returns 500 on database errors.
pub async fn get_account_handler(
    State(state): State<AccountState>,
    QueryParams(query): QueryParams<CredentialsQuery>,
) -> Result<Json<AccountResponse>, AppError> {
    let account = state
        .account_service
        .find_by_credentials(query.username.as_deref(), query.password.as_deref())
        .await?;

    Ok(Json(account.into()))
}

/// Approves a pending account.
///
/// # Endpoint
///
/// `POST /api/v1/accounts/approve?accID=...`
///
/// # Errors
///
/// Returns 400 if `accID` is empty or not a number.
/// Returns 500 on database errors.
pub async fn approve_account_handler(
    State(state): State<AccountState>,
    QueryParams(query): QueryParams<AccountIdQuery>,
) -> Result<(StatusCode, String), AppError> {
    let id = parse_required_id(query.acc_id.as_deref(), ACCOUNT_ID)?;

    state.account_service.approve_account(id).await?;

    Ok(plain_text(StatusCode::OK, "Account approved successfully"))
}

/// Partially updates an account.
///
/// # Endpoint
///
/// `PUT /api/v1/accounts/{accID}`
///
/// # Request Body
///
/// All fields are optional. Only provided, non-empty fields are changed.
///
/// ```json
/// { "username": "renamed", "password": "new-secret", "accType": "Admin" }
/// ```
///
/// # Errors
///
/// Returns 400 if the identifier or body is invalid, or the body has no fields.
/// Returns 500 on database errors.
pub async fn update_account_handler(
    State(state): State<AccountState>,
    PathParam(acc_id): PathParam<String>,
    JsonPayload(payload): JsonPayload<UpdateAccountRequest>,
) -> Result<(StatusCode, String), AppError> {
    let id = parse_required_id(Some(&acc_id), ACCOUNT_ID)?;

    state
        .account_service
        .update_account(id, payload.into())
        .await?;

    Ok(plain_text(StatusCode::ACCEPTED, "Account updated successfully"))
}

/// Deletes an account.
///
/// # Endpoint
///
/// `DELETE /api/v1/accounts/delete?accID=...`
///
/// # Errors
///
/// Returns 400 if `accID` is empty or not a number.
/// Returns 500 on database errors.
pub async fn delete_account_handler(
    State(state): State<AccountState>,
    QueryParams(query): QueryParams<AccountIdQuery>,
) -> Result<(StatusCode, String), AppError> {
    let id = parse_required_id(query.acc_id.as_deref(), ACCOUNT_ID)?;

    state.account_service.delete_account(id).await?;

    Ok(plain_text(StatusCode::OK, "Account deleted successfully"))
}
