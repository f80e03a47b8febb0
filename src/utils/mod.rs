//! Utility functions shared by the service and persistence layers.
//!
//! - [`identifier`] - Validation of identifiers taken from requests
//! - [`like_pattern`] - Escaped `LIKE` patterns for record search

pub mod identifier;
pub mod like_pattern;
