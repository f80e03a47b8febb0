//! HTTP middleware shared by both services.

pub mod tracing;
