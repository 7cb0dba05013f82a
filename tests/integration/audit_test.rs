//! Integration tests for the audit trail.

use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode};

use portfolio_entity::user::Role;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_each_request_is_recorded_once() {
    let app = TestApp::new().await;

    let ok = app.request("GET", "/skills", None, None).await;
    let missing = app.request("GET", "/skills/nope", None, None).await;

    let entries = app.audit_entries().await;
    assert_eq!(entries.len(), 2);

    assert_eq!(entries[0].path, "/skills");
    assert_eq!(entries[0].method, "GET");
    assert_eq!(entries[0].status_code, Some(ok.status.as_u16()));
    assert!(entries[0].duration_ms >= 0.0);
    assert_eq!(entries[0].subject, None);
    assert_eq!(entries[0].role, None);

    assert_eq!(entries[1].path, "/skills/nope");
    assert_eq!(entries[1].status_code, Some(missing.status.as_u16()));
}

#[tokio::test]
async fn test_identity_is_recorded() {
    let app = TestApp::new().await;
    let token = app.token_for("ada", Role::Maintainer);

    app.request("GET", "/users/me", None, Some(&token)).await;
    app.request("GET", "/users/me", None, Some("forged")).await;

    let entries = app.audit_entries().await;
    assert_eq!(entries[0].subject.as_deref(), Some("ada"));
    assert_eq!(entries[0].role, Some(Role::Maintainer));
    assert_eq!(entries[0].status_code, Some(200));

    assert_eq!(entries[1].subject, None);
    assert_eq!(entries[1].role, Some(Role::User));
    assert_eq!(entries[1].status_code, Some(401));
}

#[tokio::test]
async fn test_trailing_slash_redirect_is_not_recorded() {
    let app = TestApp::new().await;

    let redirect = app.request("GET", "/projects/", None, None).await;
    assert_eq!(redirect.status, StatusCode::TEMPORARY_REDIRECT);
    app.request("GET", "/projects", None, None).await;

    let entries = app.audit_entries().await;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].path, "/projects");
    assert_eq!(entries[0].status_code, Some(200));
}

#[tokio::test]
async fn test_client_address_is_recorded() {
    let app = TestApp::new().await;
    let req = Request::builder()
        .uri("/")
        .header("x-forwarded-for", "203.0.113.7, 10.0.0.1")
        .header("user-agent", "integration/1.0")
        .body(Body::empty())
        .unwrap();

    app.send(req).await;

    let entries = app.audit_entries().await;
    assert_eq!(entries[0].client_ip.as_deref(), Some("203.0.113.7"));
    assert_eq!(entries[0].user_agent.as_deref(), Some("integration/1.0"));
}

#[tokio::test]
async fn test_cancelled_request_is_recorded_without_status() {
    let app = TestApp::new().await;
    let token = app.token(Role::Owner);
    let stalled = futures::stream::pending::<Result<Vec<u8>, std::io::Error>>();
    let req = Request::builder()
        .method("PUT")
        .uri("/personal-info")
        .header("Content-Type", "application/json")
        .header("Authorization", format!("Bearer {token}"))
        .body(Body::from_stream(stalled))
        .unwrap();

    let attempt = tokio::time::timeout(Duration::from_millis(100), app.send(req)).await;
    assert!(attempt.is_err());

    let entries = app.audit_entries().await;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].path, "/personal-info");
    assert_eq!(entries[0].method, "PUT");
    assert_eq!(entries[0].status_code, None);
    assert_eq!(entries[0].role, Some(Role::Owner));
}

#[tokio::test]
async fn test_admin_reads_and_clears_log() {
    let app = TestApp::new().await;
    let owner = app.token(Role::Owner);

    app.request("GET", "/", None, None).await;
    app.request("GET", "/skills", None, None).await;

    let last = app
        .request("GET", "/admin/logs?last=1", None, Some(&owner))
        .await;
    assert_eq!(last.status, StatusCode::OK);
    let listed = last.body["data"].as_array().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["path"], "/skills");

    let all = app.request("GET", "/admin/logs", None, Some(&owner)).await;
    // The first listing request was recorded as well.
    assert_eq!(all.body["data"].as_array().unwrap().len(), 3);

    let cleared = app.request("DELETE", "/admin/logs", None, Some(&owner)).await;
    assert_eq!(cleared.status, StatusCode::OK);
    assert_eq!(cleared.body["data"]["deleted_entries"], 4);

    let entries = app.audit_entries().await;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].method, "DELETE");
}

#[tokio::test]
async fn test_admin_rejects_bad_last_and_non_owner() {
    let app = TestApp::new().await;
    let owner = app.token(Role::Owner);
    let maintainer = app.token(Role::Maintainer);

    let bad = app
        .request("GET", "/admin/logs?last=ten", None, Some(&owner))
        .await;
    assert_eq!(bad.status, StatusCode::BAD_REQUEST);
    assert_eq!(bad.error_code(), "INVALID_LAST_QUERY");

    let forbidden = app
        .request("GET", "/admin/logs", None, Some(&maintainer))
        .await;
    assert_eq!(forbidden.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_audit_file_rotates() {
    let app = TestApp::with_config(|config| {
        config.audit.max_bytes = 400;
        config.audit.backup_count = 2;
    })
    .await;

    for _ in 0..12 {
        app.request("GET", "/", None, None).await;
    }
    // Flush the queue before looking at the directory.
    app.audit_entries().await;

    let log = app.audit_dir.path().join("audit.log");
    assert!(log.exists());
    assert!(app.audit_dir.path().join("audit.log.1").exists());
    assert!(app.audit_dir.path().join("audit.log.2").exists());
    assert!(!app.audit_dir.path().join("audit.log.3").exists());
    assert!(std::fs::metadata(&log).unwrap().len() <= 400);
}
