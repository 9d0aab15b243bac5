//! HTTP-level integration tests for design systems and their nested
//! token/component resources, including cascade deletion.

mod common;

use axum::http::StatusCode;
use axum::Router;
use common::{body_json, delete, get, post_json, put_json};

async fn create_project(app: Router) -> String {
    let resp = post_json(
        app,
        "/api/v1/projects",
        serde_json::json!({"name": "Workspace"}),
    )
    .await;
    body_json(resp).await["data"]["id"]
        .as_str()
        .unwrap()
        .to_string()
}

async fn create_design_system(app: Router, project_id: &str, name: &str) -> String {
    let resp = post_json(
        app,
        "/api/v1/design-systems",
        serde_json::json!({"project_id": project_id, "name": name}),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    body_json(resp).await["data"]["id"]
        .as_str()
        .unwrap()
        .to_string()
}

#[tokio::test]
async fn test_create_design_system_defaults() {
    let app = common::build_test_app();
    let project_id = create_project(app.clone()).await;

    let resp = post_json(
        app,
        "/api/v1/design-systems",
        serde_json::json!({"project_id": project_id, "name": "Kit"}),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let json = body_json(resp).await;
    assert_eq!(json["data"]["version"], "1.0.0");
    assert_eq!(json["data"]["is_public"], false);
}

#[tokio::test]
async fn test_create_design_system_under_missing_project_returns_404() {
    let app = common::build_test_app();
    let resp = post_json(
        app,
        "/api/v1/design-systems",
        serde_json::json!({
            "project_id": "00000000-0000-0000-0000-000000000000",
            "name": "Orphan"
        }),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_design_systems_scoped_by_project() {
    let app = common::build_test_app();
    let p1 = create_project(app.clone()).await;
    let p2 = create_project(app.clone()).await;
    create_design_system(app.clone(), &p1, "A").await;
    create_design_system(app.clone(), &p2, "B").await;

    let resp = get(app.clone(), &format!("/api/v1/design-systems?project_id={p1}")).await;
    let json = body_json(resp).await;
    let systems = json["data"].as_array().unwrap();
    assert_eq!(systems.len(), 1);
    assert_eq!(systems[0]["name"], "A");

    let resp = get(app, "/api/v1/design-systems").await;
    let json = body_json(resp).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_token_crud_under_design_system() {
    let app = common::build_test_app();
    let project_id = create_project(app.clone()).await;
    let ds = create_design_system(app.clone(), &project_id, "Kit").await;

    // Create.
    let resp = post_json(
        app.clone(),
        &format!("/api/v1/design-systems/{ds}/tokens"),
        serde_json::json!({"name": "Primary", "value": "#3b82f6", "type": "color"}),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let token = body_json(resp).await;
    let token_id = token["data"]["id"].as_str().unwrap().to_string();
    assert_eq!(token["data"]["type"], "color");

    // New token appears first in the listing.
    let resp = get(app.clone(), &format!("/api/v1/design-systems/{ds}/tokens")).await;
    let json = body_json(resp).await;
    assert_eq!(json["data"][0]["id"], token_id.as_str());

    // Update value; the change is visible on a subsequent get.
    let resp = put_json(
        app.clone(),
        &format!("/api/v1/design-systems/{ds}/tokens/{token_id}"),
        serde_json::json!({"value": "#000000"}),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = get(
        app.clone(),
        &format!("/api/v1/design-systems/{ds}/tokens/{token_id}"),
    )
    .await;
    let json = body_json(resp).await;
    assert_eq!(json["data"]["value"], "#000000");
    assert_eq!(json["data"]["name"], "Primary");

    // Delete.
    let resp = delete(
        app.clone(),
        &format!("/api/v1/design-systems/{ds}/tokens/{token_id}"),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = get(app, &format!("/api/v1/design-systems/{ds}/tokens/{token_id}")).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_token_with_unknown_type_returns_400() {
    let app = common::build_test_app();
    let project_id = create_project(app.clone()).await;
    let ds = create_design_system(app.clone(), &project_id, "Kit").await;

    let resp = post_json(
        app,
        &format!("/api/v1/design-systems/{ds}/tokens"),
        serde_json::json!({"name": "Weird", "value": "x", "type": "gradient"}),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_token_under_wrong_design_system_is_404() {
    let app = common::build_test_app();
    let project_id = create_project(app.clone()).await;
    let ds1 = create_design_system(app.clone(), &project_id, "One").await;
    let ds2 = create_design_system(app.clone(), &project_id, "Two").await;

    let resp = post_json(
        app.clone(),
        &format!("/api/v1/design-systems/{ds1}/tokens"),
        serde_json::json!({"name": "Primary", "value": "#fff", "type": "color"}),
    )
    .await;
    let token_id = body_json(resp).await["data"]["id"]
        .as_str()
        .unwrap()
        .to_string();

    let resp = get(app, &format!("/api/v1/design-systems/{ds2}/tokens/{token_id}")).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_component_crud_and_props_validation() {
    let app = common::build_test_app();
    let project_id = create_project(app.clone()).await;
    let ds = create_design_system(app.clone(), &project_id, "Kit").await;

    let resp = post_json(
        app.clone(),
        &format!("/api/v1/design-systems/{ds}/components"),
        serde_json::json!({
            "name": "Button",
            "type": "button",
            "props": {"text": "Click me", "variant": "default"},
            "code": "<Button>Click me</Button>"
        }),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let component = body_json(resp).await;
    assert_eq!(component["data"]["props"]["text"], "Click me");

    // Non-object props are rejected.
    let resp = post_json(
        app.clone(),
        &format!("/api/v1/design-systems/{ds}/components"),
        serde_json::json!({"name": "Bad", "type": "button", "props": [1, 2]}),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // Unknown component types are rejected.
    let resp = post_json(
        app,
        &format!("/api/v1/design-systems/{ds}/components"),
        serde_json::json!({"name": "Bad", "type": "hologram"}),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_design_system_cascades_to_children() {
    let app = common::build_test_app();
    let project_id = create_project(app.clone()).await;
    let ds = create_design_system(app.clone(), &project_id, "Doomed").await;

    post_json(
        app.clone(),
        &format!("/api/v1/design-systems/{ds}/tokens"),
        serde_json::json!({"name": "T1", "value": "#111", "type": "color"}),
    )
    .await;
    post_json(
        app.clone(),
        &format!("/api/v1/design-systems/{ds}/components"),
        serde_json::json!({"name": "C1", "type": "button"}),
    )
    .await;

    let resp = delete(app.clone(), &format!("/api/v1/design-systems/{ds}")).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = get(app.clone(), &format!("/api/v1/design-systems/{ds}")).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // Child listings under the deleted parent are empty, not errors.
    let resp = get(app.clone(), &format!("/api/v1/design-systems/{ds}/tokens")).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_json(resp).await["data"].as_array().unwrap().is_empty());

    let resp = get(app, &format!("/api/v1/design-systems/{ds}/components")).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_json(resp).await["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_seeded_app_serves_demo_fixtures() {
    let app = common::build_seeded_test_app();

    let resp = get(app.clone(), "/api/v1/design-systems").await;
    let json = body_json(resp).await;
    let systems = json["data"].as_array().unwrap();
    assert_eq!(systems.len(), 3);
    assert_eq!(systems[0]["name"], "E-commerce UI Kit");

    let ds = systems[0]["id"].as_str().unwrap();
    let resp = get(app, &format!("/api/v1/design-systems/{ds}/tokens")).await;
    let json = body_json(resp).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 13);
}
