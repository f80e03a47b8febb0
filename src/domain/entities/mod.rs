//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures mirroring the `Account` and `Record`
//! tables. Separate structs are used for creation and updates:
//! - `NewAccount`, `RecordFields` - For inserting rows
//! - `AccountPatch` - For partial account updates
//! - `RecordFilter` - For record search

pub mod account;
pub mod record;

pub use account::{Account, AccountPatch, NewAccount};
pub use record::{Record, RecordFields, RecordFilter};
