//! Handlers for capstone record endpoints.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
};

use super::plain_text;
use crate::api::dto::record::{RecordIdQuery, RecordRequest, RecordResponse, SearchRecordsQuery};
use crate::api::extract::{JsonPayload, PathParam, QueryParams};
use crate::error::AppError;
use crate::state::RecordState;
use crate::utils::identifier::parse_required_id;

const RECORD_ID: &str = "Record ID";

/// Creates a capstone record.
///
/// # Endpoint
///
/// `POST /api/v1/records`
///
/// # Errors
///
/// Returns 400 `Invalid request payload` if the body cannot be decoded.
/// Returns 500 `Internal server error` if the insert fails.
pub async fn create_record_handler(
    State(state): State<RecordState>,
    JsonPayload(payload): JsonPayload<RecordRequest>,
) -> Result<(StatusCode, String), AppError> {
    state.record_service.create_record(payload.into()).await?;

    Ok(plain_text(StatusCode::CREATED, "Record created successfully"))
}

/// Lists every record.
///
/// # Endpoint
///
/// `GET /api/v1/records` (also served at `/api/v1/records/all`)
pub async fn list_records_handler(
    State(state): State<RecordState>,
) -> Result<Json<Vec<RecordResponse>>, AppError> {
    let records = state.record_service.list_records().await?;

    Ok(Json(records.into_iter().map(RecordResponse::from).collect()))
}

/// Searches records.
///
/// # Endpoint
///
/// `GET /api/v1/records/search?acadYr=...&keyword=...`
///
/// # Query Parameters
///
/// - `acadYr` (optional): exact academic year
/// - `keyword` (optional): substring of name, title, company or description
///
/// Absent or empty parameters are not applied.
pub async fn search_records_handler(
    State(state): State<RecordState>,
    QueryParams(query): QueryParams<SearchRecordsQuery>,
) -> Result<Json<Vec<RecordResponse>>, AppError> {
    let records = state.record_service.search_records(query.into()).await?;

    Ok(Json(records.into_iter().map(RecordResponse::from).collect()))
}

/// Replaces a record's fields.
///
/// # Endpoint
///
/// `PUT /api/v1/records/{recordID}`
///
/// # Errors
///
/// Returns 400 if the identifier or body is invalid.
/// Returns 500 on database errors.
pub async fn update_record_handler(
    State(state): State<RecordState>,
    PathParam(record_id): PathParam<String>,
    JsonPayload(payload): JsonPayload<RecordRequest>,
) -> Result<(StatusCode, String), AppError> {
    let id = parse_required_id(Some(&record_id), RECORD_ID)?;

    state
        .record_service
        .update_record(id, payload.into())
        .await?;

    Ok(plain_text(StatusCode::ACCEPTED, "Record updated successfully"))
}

/// Deletes a record.
///
/// # Endpoint
///
/// `DELETE /api/v1/records/delete?recordID=...`
///
/// # Errors
///
/// Returns 400 if `recordID` is empty or not a number.
/// Returns 500 on database errors.
pub async fn delete_record_handler(
    State(state): State<RecordState>,
    QueryParams(query): QueryParams<RecordIdQuery>,
) -> Result<(StatusCode, String), AppError> {
    let id = parse_required_id(query.record_id.as_deref(), RECORD_ID)?;

    state.record_service.delete_record(id).await?;

    Ok(plain_text(StatusCode::OK, "Record deleted successfully"))
}
