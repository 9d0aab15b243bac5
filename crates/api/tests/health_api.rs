//! Health endpoint tests.

mod common;

use axum::http::StatusCode;
use common::{body_json, get};

#[tokio::test]
async fn test_health_without_database() {
    let app = common::build_test_app();

    let resp = get(app, "/health").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let json = body_json(resp).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["data_mode"], "mock");
    assert!(json["db_healthy"].is_null());
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_unknown_route_returns_404() {
    let app = common::build_test_app();
    let resp = get(app, "/api/v1/nonsense").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
