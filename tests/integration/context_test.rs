//! Integration tests for routing-level behavior: envelope, redirects, OPTIONS.

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use futures::future::join_all;

use portfolio_core::context;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_root_lists_endpoints() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    assert!(response.body["error"].is_null());
    assert_eq!(response.body["meta"]["version"], "v1");
    assert_eq!(response.body["meta"]["path"], "/");
    let endpoints = response.body["data"]["available_endpoints"].as_array().unwrap();
    assert!(endpoints.iter().any(|e| e == "/skills"));
}

#[tokio::test]
async fn test_unknown_route_is_enveloped_404() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/nowhere", None, None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.error_code(), "NOT_FOUND");
    assert_eq!(response.body["meta"]["path"], "/nowhere");
}

#[tokio::test]
async fn test_trailing_slash_redirects_with_query() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/skills/?lang=es", None, None).await;

    assert_eq!(response.status, StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        response.headers.get(header::LOCATION).unwrap(),
        "/skills?lang=es"
    );
}

#[tokio::test]
async fn test_options_lists_allowed_methods() {
    let app = TestApp::new().await;

    let response = app.request("OPTIONS", "/skills/rust", None, None).await;

    assert_eq!(response.status, StatusCode::NO_CONTENT);
    let allow = response.headers.get(header::ALLOW).unwrap().to_str().unwrap();
    for method in ["GET", "PUT", "PATCH", "DELETE"] {
        assert!(allow.contains(method), "{allow} lacks {method}");
    }
}

#[tokio::test]
async fn test_unsupported_language_is_rejected() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/skills?lang=fr", None, None).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_concurrent_requests_see_their_own_context() {
    let app = TestApp::new().await;

    let requests = (0..16).map(|i| {
        let router = app.router.clone();
        async move {
            let req = Request::builder()
                .uri(format!("/missing-{i}"))
                .header("x-request-tag", format!("tag-{i}"))
                .body(Body::empty())
                .unwrap();
            let response = tower::ServiceExt::oneshot(router, req).await.unwrap();
            let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
                .await
                .unwrap();
            let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
            (i, body["meta"]["path"].as_str().unwrap().to_string())
        }
    });

    for (i, path) in join_all(requests).await {
        assert_eq!(path, format!("/missing-{i}"));
    }
}

#[tokio::test]
async fn test_scope_isolates_concurrent_tasks() {
    let tasks = (0..8).map(|i| {
        tokio::spawn(async move {
            let mut headers = axum::http::HeaderMap::new();
            headers.insert("x-request-tag", format!("tag-{i}").parse().unwrap());
            let ctx = context::RequestContext::new(
                axum::http::Method::GET,
                &axum::http::Uri::from_static("/"),
                headers,
                None,
            );
            context::scope(ctx, async move {
                tokio::task::yield_now().await;
                let current = context::current().unwrap();
                (i, current.header("x-request-tag").map(String::from))
            })
            .await
        })
    });

    for joined in join_all(tasks).await {
        let (i, tag) = joined.unwrap();
        assert_eq!(tag.as_deref(), Some(format!("tag-{i}").as_str()));
    }
    assert!(context::try_current().is_none());
}

#[tokio::test]
async fn test_cors_preflight_is_answered_and_audited() {
    let app = TestApp::new().await;
    let req = Request::builder()
        .method("OPTIONS")
        .uri("/skills")
        .header(header::ORIGIN, "https://example.com")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();

    let response = app.send(req).await;

    assert!(response.status.is_success());
    assert_eq!(
        response
            .headers
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "*"
    );

    let entries = app.audit_entries().await;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].method, "OPTIONS");
    assert_eq!(entries[0].path, "/skills");
    assert_eq!(entries[0].status_code, Some(response.status.as_u16()));
}
