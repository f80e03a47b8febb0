//! Parsing of row identifiers taken from query strings and paths.

use crate::error::AppError;

/// Parses a required, database-assigned identifier.
///
/// `label` names the parameter in error messages, e.g. `"Account ID"`.
///
/// # Errors
///
/// Returns [`AppError::Validation`] with `"<label> parameter is required"` when the
/// value is missing or blank, and `"<label> must be a positive integer"` when it is
/// not a positive number.
pub fn parse_required_id(raw: Option<&str>, label: &str) -> Result<i64, AppError> {
    let raw = raw.map(str::trim).unwrap_or_default();

    if raw.is_empty() {
        tracing::debug!(parameter = label, "Missing identifier");
        return Err(AppError::bad_request(format!("{label} parameter is required")));
    }

    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => {
            tracing::debug!(parameter = label, value = raw, "Malformed identifier");
            Err(AppError::bad_request(format!(
                "{label} must be a positive integer"
            )))
        }
    }
}
