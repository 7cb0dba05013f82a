//! Integration tests for the personal information resource.

use axum::http::StatusCode;
use serde_json::json;

use portfolio_entity::user::Role;

use crate::helpers::{self, TestApp};

#[tokio::test]
async fn test_missing_info_is_not_found() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/personal-info", None, None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.error_code(), "INFO_NOT_FOUND");
}

#[tokio::test]
async fn test_put_then_get_info() {
    let app = TestApp::new().await;
    let owner = app.token(Role::Owner);

    let put = app
        .request("PUT", "/personal-info", Some(helpers::myinfo_body()), Some(&owner))
        .await;
    assert_eq!(put.status, StatusCode::ACCEPTED);
    assert_eq!(put.body["data"]["upserted"], true);

    let again = app
        .request("PUT", "/personal-info", Some(helpers::myinfo_body()), Some(&owner))
        .await;
    assert_eq!(again.body["data"]["upserted"], false);

    let es = app.request("GET", "/personal-info?lang=es", None, None).await;
    assert_eq!(es.status, StatusCode::OK);
    assert_eq!(es.body["data"]["full_name"], "Ada Lovelace");
    assert_eq!(es.body["data"]["about_me"], "Matemática");
}

#[tokio::test]
async fn test_delete_attribute() {
    let app = TestApp::new().await;
    let owner = app.token(Role::Owner);
    app.request("PUT", "/personal-info", Some(helpers::myinfo_body()), Some(&owner))
        .await;

    let removed = app
        .request("DELETE", "/personal-info/phone", None, Some(&owner))
        .await;
    assert_eq!(removed.status, StatusCode::OK);

    let info = app.request("GET", "/personal-info", None, None).await;
    assert!(info.body["data"]["phone"].is_null());
    assert_eq!(info.body["data"]["first_name"], "Ada");
}

#[tokio::test]
async fn test_unknown_attribute_suggests_closest() {
    let app = TestApp::new().await;
    let owner = app.token(Role::Owner);

    let response = app
        .request("DELETE", "/personal-info/pseudo", None, Some(&owner))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "ATTRIBUTE_NOT_FOUND");
    assert_eq!(response.body["data"]["attribute"], "pseudo");
    assert_eq!(response.body["data"]["suggestion"], "pseudonym");
    assert!(response.body["data"]["available_attributes"]
        .as_array()
        .unwrap()
        .contains(&json!("about_me")));
}

#[tokio::test]
async fn test_delete_info() {
    let app = TestApp::new().await;
    let owner = app.token(Role::Owner);
    app.request("PUT", "/personal-info", Some(helpers::myinfo_body()), Some(&owner))
        .await;

    let deleted = app.request("DELETE", "/personal-info", None, Some(&owner)).await;
    assert_eq!(deleted.status, StatusCode::OK);
    assert_eq!(deleted.body["data"]["deleted_count"], 1);

    let gone = app.request("GET", "/personal-info", None, None).await;
    assert_eq!(gone.error_code(), "INFO_NOT_FOUND");
}

#[tokio::test]
async fn test_invalid_info_is_rejected() {
    let app = TestApp::new().await;
    let owner = app.token(Role::Owner);
    let mut body = helpers::myinfo_body();
    body["email"] = json!("not-an-email");

    let response = app
        .request("PUT", "/personal-info", Some(body), Some(&owner))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}
