//! DTOs for the account service.

use serde::{Deserialize, Serialize};

use crate::domain::entities::account::DEFAULT_ACC_TYPE;
use crate::domain::entities::{Account, AccountPatch, NewAccount};

/// Body of `POST /api/v1/accounts` and `POST /api/v1/accounts/admin`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccountRequest {
    #[serde(alias = "Username")]
    pub username: String,

    #[serde(alias = "Password")]
    pub password: String,

    /// Defaults to `User`.
    #[serde(alias = "AccType")]
    pub acc_type: Option<String>,

    /// Defaults to the status of the endpoint used (`Pending` or `Created`).
    #[serde(alias = "AccStatus")]
    pub acc_status: Option<String>,
}

impl CreateAccountRequest {
    /// Converts the request, filling absent or blank values with defaults.
    pub fn into_new_account(self, default_status: &str) -> NewAccount {
        NewAccount {
            username: self.username,
            password: self.password,
            acc_type: self
                .acc_type
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_ACC_TYPE.to_string()),
            acc_status: self
                .acc_status
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default_status.to_string()),
        }
    }
}

/// Body of `PUT /api/v1/accounts/{accID}`. Absent fields are left unchanged.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAccountRequest {
    #[serde(alias = "Username")]
    pub username: Option<String>,

    #[serde(alias = "Password")]
    pub password: Option<String>,

    #[serde(alias = "AccType")]
    pub acc_type: Option<String>,
}

impl From<UpdateAccountRequest> for AccountPatch {
    fn from(request: UpdateAccountRequest) -> Self {
        AccountPatch {
            username: request.username.filter(|v| !v.is_empty()),
            password: request.password.filter(|v| !v.is_empty()),
            acc_type: request.acc_type.filter(|v| !v.is_empty()),
        }
    }
}

/// Query of `GET /api/v1/accounts`.
#[derive(Debug, Deserialize)]
pub struct CredentialsQuery {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Query of the approve and delete endpoints.
#[derive(Debug, Deserialize)]
pub struct AccountIdQuery {
    #[serde(rename = "accID")]
    pub acc_id: Option<String>,
}

/// Account as returned by the lookup endpoint. The password is never included.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountResponse {
    pub acc_id: i64,
    pub username: String,
    pub acc_type: String,
    pub acc_status: String,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            acc_id: account.id,
            username: account.username,
            acc_type: account.acc_type,
            acc_status: account.acc_status,
        }
    }
}
