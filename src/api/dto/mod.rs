//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde. JSON bodies are camelCase; request bodies also accept
//! the PascalCase column names as aliases.

pub mod account;
pub mod health;
pub mod record;
