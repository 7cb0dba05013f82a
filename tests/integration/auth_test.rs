//! Integration tests for login and the authorization guard.

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use serde_json::json;

use portfolio_entity::user::Role;

use crate::helpers::{self, MAINTAINER_PASSWORD, OWNER_PASSWORD, TestApp};

#[tokio::test]
async fn test_login_form_grants_owner() {
    let app = TestApp::new().await;

    let response = app.login_form("ada", OWNER_PASSWORD).await;

    assert_eq!(response.status, StatusCode::ACCEPTED);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.body["data"]["token_type"], "bearer");
    assert_eq!(response.body["data"]["role"], "owner");

    let token = response.body["data"]["access_token"].as_str().unwrap();
    let identity = app.state.tokens.verify(token).unwrap();
    assert_eq!(identity.subject, "ada");
    assert_eq!(identity.role, Role::Owner);
}

#[tokio::test]
async fn test_login_json_grants_maintainer() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/login",
            Some(json!({ "username": "bob", "password": MAINTAINER_PASSWORD })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::ACCEPTED);
    assert_eq!(response.body["data"]["role"], "maintainer");
}

#[tokio::test]
async fn test_login_wrong_password_grants_user() {
    let app = TestApp::new().await;

    let response = app.login_form("eve", "guess").await;

    assert_eq!(response.status, StatusCode::ACCEPTED);
    assert_eq!(response.body["data"]["role"], "user");
}

#[tokio::test]
async fn test_login_requires_username() {
    let app = TestApp::new().await;

    let response = app
        .request("POST", "/login", Some(json!({ "username": "  ", "password": "x" })), None)
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_me_without_token_is_unauthenticated() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/users/me", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.error_code(), "UNAUTHENTICATED");
    assert_eq!(response.body["success"], false);
    assert_eq!(response.body["meta"]["path"], "/users/me");
}

#[tokio::test]
async fn test_me_with_garbage_token_is_unauthorized() {
    let app = TestApp::new().await;

    let response = app
        .request("GET", "/users/me", None, Some("not-a-token"))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.error_code(), "UNAUTHORIZED");
}

#[tokio::test]
async fn test_non_bearer_scheme_is_unauthenticated() {
    let app = TestApp::new().await;
    let req = axum::http::Request::builder()
        .uri("/users/me")
        .header("Authorization", "Basic YWRhOnB3")
        .body(axum::body::Body::empty())
        .unwrap();

    let response = app.send(req).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.error_code(), "UNAUTHENTICATED");
}

#[tokio::test]
async fn test_expired_token_is_rejected() {
    let app = TestApp::new().await;
    let expired = app
        .state
        .tokens
        .encoder()
        .issue_at("ada", Role::Owner, Utc::now() - Duration::minutes(30))
        .unwrap()
        .token;

    let response = app.request("GET", "/users/me", None, Some(&expired)).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.error_code(), "UNAUTHORIZED");
}

#[tokio::test]
async fn test_me_returns_identity() {
    let app = TestApp::new().await;
    let token = app.token_for("carol", Role::User);

    let response = app.request("GET", "/users/me", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["subject"], "carol");
    assert_eq!(response.body["data"]["role"], "user");
    assert_eq!(
        response.body["data"]["available_roles"],
        json!(["owner", "maintainer", "user"])
    );
}

#[tokio::test]
async fn test_maintainer_is_forbidden_from_owner_routes() {
    let app = TestApp::new().await;
    let token = app.token_for("alice", Role::Maintainer);

    let forbidden = app
        .request("DELETE", "/skills/rust", None, Some(&token))
        .await;
    assert_eq!(forbidden.status, StatusCode::FORBIDDEN);
    assert_eq!(forbidden.error_code(), "FORBIDDEN");

    let allowed = app
        .request("POST", "/skills", Some(helpers::skill_body("rust")), Some(&token))
        .await;
    assert_eq!(allowed.status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_owner_passes_every_guard() {
    let app = TestApp::new().await;
    let owner = app.token(Role::Owner);

    let routes = [
        ("GET", "/users/me"),
        ("POST", "/skills"),
        ("GET", "/admin"),
    ];
    for (method, path) in routes {
        let body = (method == "POST").then(|| helpers::skill_body("go"));
        let response = app.request(method, path, body, Some(&owner)).await;
        assert!(
            response.status.is_success(),
            "{method} {path} returned {}",
            response.status
        );
    }
}

#[tokio::test]
async fn test_user_cannot_write() {
    let app = TestApp::new().await;
    let token = app.token(Role::User);

    let response = app
        .request("POST", "/projects", Some(helpers::project_body("x", "Project")), Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_guard_runs_before_body_parsing() {
    let app = TestApp::new().await;

    let response = app
        .request("PUT", "/personal-info", Some(json!({ "nonsense": true })), None)
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}
