//! Account entity and its lifecycle values.

/// Status of an account awaiting operator approval.
pub const STATUS_PENDING: &str = "Pending";

/// Status of an approved account.
pub const STATUS_CREATED: &str = "Created";

/// Account type assigned when the caller does not provide one.
pub const DEFAULT_ACC_TYPE: &str = "User";

/// A stored account.
///
/// The password is kept as plain text because the external schema stores it
/// that way; it is never serialized into API responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub id: i64,
    pub username: String,
    pub password: String,
    pub acc_type: String,
    pub acc_status: String,
}

impl Account {
    /// Creates a new Account instance.
    pub fn new(
        id: i64,
        username: String,
        password: String,
        acc_type: String,
        acc_status: String,
    ) -> Self {
        Self {
            id,
            username,
            password,
            acc_type,
            acc_status,
        }
    }
}

/// Input data for inserting an account. The identifier is assigned by the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    pub username: String,
    pub password: String,
    pub acc_type: String,
    pub acc_status: String,
}

/// Partial update for an existing account.
///
/// `None` fields are left unchanged. Status changes go through approval only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountPatch {
    pub username: Option<String>,
    pub password: Option<String>,
    pub acc_type: Option<String>,
}

impl AccountPatch {
    /// Returns true if the patch would not touch any column.
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.password.is_none() && self.acc_type.is_none()
    }
}
