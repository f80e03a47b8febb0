mod common;

use axum::http::StatusCode;
use common::{FailAt, InMemoryAccountRepository};
use serde_json::json;

// ─── CREATE ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_account_success() {
    let repo = InMemoryAccountRepository::new();
    let server = common::account_server(repo.clone());

    let response = server
        .post("/api/v1/accounts")
        .json(&json!({
            "username": "testacc",
            "password": "testpwd",
            "accType": "User",
            "accStatus": "Pending"
        }))
        .await;

    response.assert_status(StatusCode::CREATED);
    response.assert_text("Account created successfully\n");

    let rows = repo.rows();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].username, "testacc");
    assert_eq!(rows[0].acc_status, "Pending");
}

#[tokio::test]
async fn test_create_account_defaults_to_pending_user() {
    let repo = InMemoryAccountRepository::new();
    let server = common::account_server(repo.clone());

    server
        .post("/api/v1/accounts")
        .json(&json!({ "username": "newuser", "password": "pw" }))
        .await
        .assert_status(StatusCode::CREATED);

    let account = &repo.rows()[0];
    assert_eq!(account.acc_type, "User");
    assert_eq!(account.acc_status, "Pending");
}

#[tokio::test]
async fn test_create_account_accepts_pascal_case_fields() {
    let repo = InMemoryAccountRepository::new();
    let server = common::account_server(repo.clone());

    server
        .post("/api/v1/accounts")
        .json(&json!({ "Username": "legacy", "Password": "pw", "AccType": "Admin" }))
        .await
        .assert_status(StatusCode::CREATED);

    assert_eq!(repo.rows()[0].acc_type, "Admin");
}

#[tokio::test]
async fn test_create_account_is_not_idempotent() {
    let repo = InMemoryAccountRepository::new();
    let server = common::account_server(repo.clone());
    let body = json!({ "username": "twice", "password": "pw" });

    server.post("/api/v1/accounts").json(&body).await;
    server.post("/api/v1/accounts").json(&body).await;

    assert_eq!(repo.rows().len(), 2);
}

#[tokio::test]
async fn test_create_account_invalid_payload() {
    let repo = InMemoryAccountRepository::new();
    let server = common::account_server(repo.clone());

    let response = server.post("/api/v1/accounts").text("invalid json").await;

    response.assert_status_bad_request();
    response.assert_text("Invalid request payload\n");
    assert_eq!(repo.calls(), 0);
}

#[tokio::test]
async fn test_create_account_missing_password() {
    let repo = InMemoryAccountRepository::new();
    let server = common::account_server(repo.clone());

    let response = server
        .post("/api/v1/accounts")
        .json(&json!({ "username": "nopass" }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(repo.calls(), 0);
}

#[tokio::test]
async fn test_create_account_prepare_failure() {
    let server = common::account_server(InMemoryAccountRepository::failing(FailAt::Prepare));

    let response = server
        .post("/api/v1/accounts")
        .json(&json!({ "username": "testacc", "password": "testpwd" }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    response.assert_text("Internal server error\n");
}

#[tokio::test]
async fn test_create_account_execute_failure_hides_driver_error() {
    let server = common::account_server(InMemoryAccountRepository::failing(FailAt::Execute));

    let response = server
        .post("/api/v1/accounts")
        .json(&json!({ "username": "testacc", "password": "testpwd" }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let text = response.text();
    assert_eq!(text, "Internal server error\n");
    assert!(!text.contains("Duplicate"));
}

#[tokio::test]
async fn test_admin_create_account_is_approved() {
    let repo = InMemoryAccountRepository::new();
    let server = common::account_server(repo.clone());

    let response = server
        .post("/api/v1/accounts/admin")
        .json(&json!({ "username": "staff", "password": "pw", "accType": "Admin" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    response.assert_text("Account created successfully\n");
    assert_eq!(repo.rows()[0].acc_status, "Created");
}

// ─── GET ─────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_get_account_success() {
    let repo = InMemoryAccountRepository::new();
    let id = repo.seed("testacc", "testpwd", "User", "Pending");
    let server = common::account_server(repo);

    let response = server
        .get("/api/v1/accounts")
        .add_query_param("username", "testacc")
        .add_query_param("password", "testpwd")
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({
        "accId": id,
        "username": "testacc",
        "accType": "User",
        "accStatus": "Pending"
    }));
}

#[tokio::test]
async fn test_get_account_never_returns_password() {
    let repo = InMemoryAccountRepository::new();
    repo.seed("testacc", "testpwd", "User", "Created");
    let server = common::account_server(repo);

    let response = server
        .get("/api/v1/accounts?username=testacc&password=testpwd")
        .await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert!(json.get("password").is_none());
    assert!(!response.text().contains("testpwd"));
}

#[tokio::test]
async fn test_get_account_repeated_parameter_uses_first_value() {
    let repo = InMemoryAccountRepository::new();
    repo.seed("testacc", "testpwd", "User", "Pending");
    let server = common::account_server(repo);

    let response = server
        .get("/api/v1/accounts?username=testacc&password=testpwd&password=x")
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["username"], "testacc");
}

#[tokio::test]
async fn test_get_account_missing_password() {
    let repo = InMemoryAccountRepository::new();
    let server = common::account_server(repo.clone());

    let response = server.get("/api/v1/accounts?username=testacc").await;

    response.assert_status_bad_request();
    response.assert_text("Username and Password parameters are required\n");
    assert_eq!(repo.calls(), 0);
}

#[tokio::test]
async fn test_get_account_empty_password() {
    let repo = InMemoryAccountRepository::new();
    let server = common::account_server(repo.clone());

    let response = server
        .get("/api/v1/accounts?username=testacc&password=")
        .await;

    response.assert_status_bad_request();
    response.assert_text("Username and Password parameters are required\n");
    assert_eq!(repo.calls(), 0);
}

#[tokio::test]
async fn test_get_account_empty_parameters() {
    let repo = InMemoryAccountRepository::new();
    let server = common::account_server(repo.clone());

    let response = server.get("/api/v1/accounts?username=&password=").await;

    response.assert_status_bad_request();
    response.assert_text("Username and Password parameters are required\n");
    assert_eq!(repo.calls(), 0);
}

#[tokio::test]
async fn test_get_account_not_found() {
    let repo = InMemoryAccountRepository::new();
    repo.seed("testacc", "testpwd", "User", "Pending");
    let server = common::account_server(repo);

    let response = server
        .get("/api/v1/accounts?username=testacc&password=wrong")
        .await;

    response.assert_status_not_found();
    response.assert_text("Account not found\n");
}

#[tokio::test]
async fn test_get_account_storage_failure() {
    let server = common::account_server(InMemoryAccountRepository::failing(FailAt::Execute));

    let response = server
        .get("/api/v1/accounts?username=testacc&password=testpwd")
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    response.assert_text("Internal server error\n");
}

// ─── APPROVE ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_approve_account_success() {
    let repo = InMemoryAccountRepository::new();
    let id = repo.seed("testacc", "testpwd", "User", "Pending");
    let server = common::account_server(repo.clone());

    let response = server
        .post(&format!("/api/v1/accounts/approve?accID={id}"))
        .await;

    response.assert_status_ok();
    response.assert_text("Account approved successfully\n");
    assert_eq!(repo.get(id).unwrap().acc_status, "Created");
}

#[tokio::test]
async fn test_approve_unknown_account_still_succeeds() {
    let server = common::account_server(InMemoryAccountRepository::new());

    let response = server.post("/api/v1/accounts/approve?accID=999").await;

    response.assert_status_ok();
    response.assert_text("Account approved successfully\n");
}

#[tokio::test]
async fn test_approve_account_repeated_id_uses_first_value() {
    let repo = InMemoryAccountRepository::new();
    let first = repo.seed("first", "pw", "User", "Pending");
    let second = repo.seed("second", "pw", "User", "Pending");
    let server = common::account_server(repo.clone());

    let response = server
        .post(&format!("/api/v1/accounts/approve?accID={first}&accID={second}"))
        .await;

    response.assert_status_ok();
    response.assert_text("Account approved successfully\n");
    assert_eq!(repo.get(first).unwrap().acc_status, "Created");
    assert_eq!(repo.get(second).unwrap().acc_status, "Pending");
}

#[tokio::test]
async fn test_approve_account_missing_id() {
    let repo = InMemoryAccountRepository::new();
    let server = common::account_server(repo.clone());

    let response = server.post("/api/v1/accounts/approve?accID=").await;

    response.assert_status_bad_request();
    response.assert_text("Account ID parameter is required\n");
    assert_eq!(repo.calls(), 0);
}

#[tokio::test]
async fn test_approve_account_non_numeric_id() {
    let repo = InMemoryAccountRepository::new();
    let server = common::account_server(repo.clone());

    let response = server.post("/api/v1/accounts/approve?accID=abc").await;

    response.assert_status_bad_request();
    assert_eq!(repo.calls(), 0);
}

#[tokio::test]
async fn test_approve_account_storage_failure() {
    let server = common::account_server(InMemoryAccountRepository::failing(FailAt::Prepare));

    let response = server.post("/api/v1/accounts/approve?accID=1").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    response.assert_text("Internal server error\n");
}

// ─── UPDATE ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_update_account_success() {
    let repo = InMemoryAccountRepository::new();
    let id = repo.seed("testacc", "testpwd", "User", "Created");
    let server = common::account_server(repo.clone());

    let response = server
        .put(&format!("/api/v1/accounts/{id}"))
        .json(&json!({ "accType": "Admin" }))
        .await;

    response.assert_status(StatusCode::ACCEPTED);
    response.assert_text("Account updated successfully\n");

    let account = repo.get(id).unwrap();
    assert_eq!(account.acc_type, "Admin");
    assert_eq!(account.username, "testacc");
}

#[tokio::test]
async fn test_update_account_without_fields() {
    let repo = InMemoryAccountRepository::new();
    let server = common::account_server(repo.clone());

    let response = server.put("/api/v1/accounts/1").json(&json!({})).await;

    response.assert_status_bad_request();
    assert_eq!(repo.calls(), 0);
}

#[tokio::test]
async fn test_update_account_non_numeric_id() {
    let repo = InMemoryAccountRepository::new();
    let server = common::account_server(repo.clone());

    let response = server
        .put("/api/v1/accounts/abc")
        .json(&json!({ "username": "x" }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(repo.calls(), 0);
}

#[tokio::test]
async fn test_update_account_invalid_path_encoding() {
    let repo = InMemoryAccountRepository::new();
    let server = common::account_server(repo.clone());

    let response = server
        .put("/api/v1/accounts/%FF")
        .json(&json!({ "username": "x" }))
        .await;

    response.assert_status_bad_request();
    response.assert_text("Invalid path parameter\n");
    assert_eq!(repo.calls(), 0);
}

#[tokio::test]
async fn test_update_account_storage_failure() {
    let server = common::account_server(InMemoryAccountRepository::failing(FailAt::Execute));

    let response = server
        .put("/api/v1/accounts/1")
        .json(&json!({ "accType": "Admin" }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    response.assert_text("Internal server error\n");
}

// ─── DELETE ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_delete_account_success() {
    let repo = InMemoryAccountRepository::new();
    let id = repo.seed("testacc", "testpwd", "User", "Pending");
    let server = common::account_server(repo.clone());

    let response = server
        .delete(&format!("/api/v1/accounts/delete?accID={id}"))
        .await;

    response.assert_status_ok();
    response.assert_text("Account deleted successfully\n");
    assert!(repo.rows().is_empty());
}

#[tokio::test]
async fn test_delete_account_missing_id() {
    let repo = InMemoryAccountRepository::new();
    let server = common::account_server(repo.clone());

    let response = server.delete("/api/v1/accounts/delete").await;

    response.assert_status_bad_request();
    response.assert_text("Account ID parameter is required\n");
    assert_eq!(repo.calls(), 0);
}

#[tokio::test]
async fn test_delete_account_storage_failure() {
    let server = common::account_server(InMemoryAccountRepository::failing(FailAt::Execute));

    let response = server.delete("/api/v1/accounts/delete?accID=1").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    response.assert_text("Internal server error\n");
}
