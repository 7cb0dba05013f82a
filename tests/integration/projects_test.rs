//! Integration tests for the projects resource.

use axum::http::StatusCode;
use serde_json::json;

use portfolio_entity::user::Role;

use crate::helpers::{self, TestApp};

async fn create(app: &TestApp, token: &str, name: &str, kind: &str) -> serde_json::Value {
    let response = app
        .request("POST", "/projects", Some(helpers::project_body(name, kind)), Some(token))
        .await;
    assert_eq!(response.status, StatusCode::CREATED, "{}", response.body);
    response.body["data"].clone()
}

#[tokio::test]
async fn test_projects_get_sequential_ids() {
    let app = TestApp::new().await;
    let token = app.token(Role::Maintainer);

    let first = create(&app, &token, "cli", "Project").await;
    let second = create(&app, &token, "site", "WebProject").await;
    let third = create(&app, &token, "infra", "DevOpsProject").await;

    assert_eq!(first, json!({ "id": 1, "name": "cli", "type": "Project" }));
    assert_eq!(second["id"], 2);
    assert_eq!(second["type"], "Web Project");
    assert_eq!(third["id"], 3);
    assert_eq!(third["type"], "DevOps Project");
}

#[tokio::test]
async fn test_builder_defaults_are_applied() {
    let app = TestApp::new().await;
    let token = app.token(Role::Maintainer);
    create(&app, &token, "site", "WebProject").await;
    create(&app, &token, "infra", "DevOpsProject").await;

    let web = app.request("GET", "/projects/1?lang=es", None, None).await;
    assert_eq!(web.status, StatusCode::OK);
    assert_eq!(web.body["data"]["stack_end"], "fullstack");
    assert_eq!(web.body["data"]["description"], "Un proyecto");
    assert!(web.body["data"]["links"]["site"].is_string());
    assert!(web.body["data"]["links"]["git"].is_string());

    let devops = app.request("GET", "/projects/2", None, None).await;
    assert_eq!(devops.body["data"]["platform"], "AWS");
    assert_eq!(devops.body["data"]["scale"], "medium");
}

#[tokio::test]
async fn test_unknown_builder_is_rejected() {
    let app = TestApp::new().await;
    let token = app.token(Role::Maintainer);

    let response = app
        .request("POST", "/projects", Some(helpers::project_body("x", "MobileProject")), Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "INVALID_REQUEST");
}

#[tokio::test]
async fn test_project_lookup_errors() {
    let app = TestApp::new().await;

    let non_numeric = app.request("GET", "/projects/abc", None, None).await;
    assert_eq!(non_numeric.status, StatusCode::BAD_REQUEST);
    assert_eq!(non_numeric.error_code(), "INVALID_PROJECT_ID");

    let missing = app.request("GET", "/projects/42", None, None).await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
    assert_eq!(missing.error_code(), "PROJECT_NOT_FOUND");
}

#[tokio::test]
async fn test_groups_follow_first_seen_order() {
    let app = TestApp::new().await;
    let token = app.token(Role::Maintainer);
    create(&app, &token, "site", "WebProject").await;
    create(&app, &token, "cli", "Project").await;
    create(&app, &token, "blog", "WebProject").await;

    let groups = app.request("GET", "/projects/groups", None, None).await;
    assert_eq!(groups.status, StatusCode::OK);
    let groups = groups.body["data"].as_array().unwrap();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0]["type"], "Web Project");
    assert_eq!(groups[0]["projects"].as_array().unwrap().len(), 2);
    assert_eq!(groups[1]["type"], "Project");

    let web = app
        .request("GET", "/projects/groups/Web%20Project", None, None)
        .await;
    assert_eq!(web.status, StatusCode::OK);
    assert_eq!(web.body["data"]["projects"][1]["name"], "blog");

    let empty = app
        .request("GET", "/projects/groups/DevOps%20Project", None, None)
        .await;
    assert_eq!(empty.status, StatusCode::BAD_REQUEST);
    assert_eq!(empty.error_code(), "INVALID_REQUEST");
}

#[tokio::test]
async fn test_put_replaces_or_creates() {
    let app = TestApp::new().await;
    let token = app.token(Role::Maintainer);
    create(&app, &token, "cli", "Project").await;

    let replaced = app
        .request("PUT", "/projects/1", Some(helpers::project_body("cli-v2", "Project")), Some(&token))
        .await;
    assert_eq!(replaced.status, StatusCode::OK);
    assert_eq!(replaced.body["data"]["id"], 1);
    assert_eq!(replaced.body["data"]["name"], "cli-v2");

    let created = app
        .request("PUT", "/projects/99", Some(helpers::project_body("new", "Project")), Some(&token))
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.body["data"]["id"], 2);

    let listed = app.request("GET", "/projects", None, None).await;
    let ids: Vec<i64> = listed.body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2]);
}

#[tokio::test]
async fn test_project_deletes() {
    let app = TestApp::new().await;
    let maintainer = app.token(Role::Maintainer);
    let owner = app.token(Role::Owner);
    create(&app, &maintainer, "a", "Project").await;
    create(&app, &maintainer, "b", "Project").await;
    create(&app, &maintainer, "c", "Project").await;

    let one = app.request("DELETE", "/projects/1", None, Some(&maintainer)).await;
    assert_eq!(one.status, StatusCode::OK);

    let again = app.request("DELETE", "/projects/1", None, Some(&maintainer)).await;
    assert_eq!(again.status, StatusCode::BAD_REQUEST);
    assert_eq!(again.error_code(), "INVALID_PROJECT_ID");

    let not_owner = app
        .request("DELETE", "/projects?confirm=true", None, Some(&maintainer))
        .await;
    assert_eq!(not_owner.status, StatusCode::FORBIDDEN);

    let unconfirmed = app.request("DELETE", "/projects", None, Some(&owner)).await;
    assert_eq!(unconfirmed.error_code(), "CONFIRM_REQUIRED");

    let all = app
        .request("DELETE", "/projects?confirm=true", None, Some(&owner))
        .await;
    assert_eq!(all.status, StatusCode::OK);
    assert_eq!(all.body["data"]["deleted_count"], 2);
}
