//! HTTP-level integration tests for the `/data-mode` resource.
//!
//! These run without a database, so the mode is pinned to mock and switch
//! attempts to database must be rejected.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, put_json};

#[tokio::test]
async fn test_get_reports_mock_mode_without_database() {
    let app = common::build_test_app();

    let resp = get(app, "/api/v1/data-mode").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let json = body_json(resp).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["mode"], "mock");
    assert_eq!(json["data"]["database_available"], false);
}

#[tokio::test]
async fn test_switch_to_database_rejected_without_database() {
    let app = common::build_test_app();

    let resp = put_json(
        app.clone(),
        "/api/v1/data-mode",
        serde_json::json!({"mode": "database"}),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let json = body_json(resp).await;
    assert_eq!(json["success"], false);
    assert!(json["error"].as_str().unwrap().contains("database"));

    // The mode is unchanged.
    let resp = get(app, "/api/v1/data-mode").await;
    let json = body_json(resp).await;
    assert_eq!(json["data"]["mode"], "mock");
}

#[tokio::test]
async fn test_switch_to_mock_is_idempotent() {
    let app = common::build_test_app();

    let resp = put_json(
        app,
        "/api/v1/data-mode",
        serde_json::json!({"mode": "mock"}),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp).await;
    assert_eq!(json["data"]["mode"], "mock");
}

#[tokio::test]
async fn test_unknown_mode_is_rejected() {
    let app = common::build_test_app();

    let resp = put_json(
        app,
        "/api/v1/data-mode",
        serde_json::json!({"mode": "hybrid"}),
    )
    .await;
    // Serde rejects the unknown enum variant before the handler runs.
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
