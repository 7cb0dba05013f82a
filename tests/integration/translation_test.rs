//! Integration tests for localized responses.

use axum::http::StatusCode;
use serde_json::json;

use portfolio_core::types::Language;
use portfolio_entity::user::Role;

use crate::helpers::{self, TestApp};

async fn seed_skill(app: &TestApp, name: &str, description: serde_json::Value) {
    let token = app.token(Role::Maintainer);
    let mut body = helpers::skill_body(name);
    body["description"] = description;
    let response = app.request("POST", "/skills", Some(body), Some(&token)).await;
    assert_eq!(response.status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_requested_language_is_served() {
    let app = TestApp::new().await;
    seed_skill(&app, "rust", json!({ "en": "Fast", "es": "Rápido" })).await;

    let es = app.request("GET", "/skills/rust?lang=es", None, None).await;
    let en = app.request("GET", "/skills/rust", None, None).await;

    assert_eq!(es.body["data"]["description"], "Rápido");
    assert_eq!(en.body["data"]["description"], "Fast");
}

#[tokio::test]
async fn test_missing_language_falls_back_to_default() {
    let app = TestApp::new().await;
    seed_skill(&app, "rust", json!({ "en": "Hello" })).await;

    let response = app.request("GET", "/skills/rust?lang=es", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["description"], "Hello");
}

#[tokio::test]
async fn test_unavailable_translation_aborts_response() {
    let app = TestApp::new().await;
    seed_skill(&app, "rust", json!({ "es": "Hola" })).await;

    let response = app.request("GET", "/skills?lang=en", None, None).await;

    assert_eq!(response.status, StatusCode::NOT_IMPLEMENTED);
    assert_eq!(response.error_code(), "TRANSLATION_NOT_AVAILABLE");
    assert_eq!(response.body["data"]["requested_language"], "en");
    assert_eq!(response.body["data"]["available_languages"], json!(["es"]));
    assert_eq!(response.body["data"]["expected_available_languages"], json!(["en", "es"]));
    assert!(response.body["data"]["default_translation"].is_null());
}

#[tokio::test]
async fn test_configured_default_language_is_used() {
    let app = TestApp::with_config(|config| config.i18n.default_language = Language::Es).await;
    seed_skill(&app, "rust", json!({ "es": "Hola" })).await;

    let response = app.request("GET", "/skills/rust", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["description"], "Hola");
}

#[tokio::test]
async fn test_edited_record_is_not_served_stale() {
    let app = TestApp::new().await;
    let token = app.token(Role::Maintainer);
    seed_skill(&app, "rust", json!({ "en": "Old" })).await;
    app.request("GET", "/skills/rust", None, None).await;

    app.request(
        "PATCH",
        "/skills/rust",
        Some(json!({ "description": { "en": "New" } })),
        Some(&token),
    )
    .await;
    let response = app.request("GET", "/skills/rust", None, None).await;

    assert_eq!(response.body["data"]["description"], "New");
}
