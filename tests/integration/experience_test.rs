//! Integration tests for the experiences resource.

use axum::http::StatusCode;

use portfolio_entity::user::Role;

use crate::helpers::{self, TestApp};

#[tokio::test]
async fn test_add_and_list_experiences() {
    let app = TestApp::new().await;
    let owner = app.token(Role::Owner);

    let created = app
        .request(
            "PUT",
            "/experiences",
            Some(helpers::experience_body("Engineer", "Acme")),
            Some(&owner),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.body["data"]["role"], "Engineer");
    assert_eq!(created.body["data"]["company"]["name"], "Acme");
    assert_eq!(created.body["data"]["description"]["es"], "Construí cosas");

    app.request(
        "PUT",
        "/experiences",
        Some(helpers::experience_body("Lead", "Globex")),
        Some(&owner),
    )
    .await;

    let listed = app.request("GET", "/experiences?lang=es", None, None).await;
    assert_eq!(listed.status, StatusCode::OK);
    let experiences = listed.body["data"].as_array().unwrap();
    assert_eq!(experiences.len(), 2);
    assert_eq!(experiences[0]["description"], "Construí cosas");

    let acme = app.request("GET", "/experiences/Acme", None, None).await;
    assert_eq!(acme.body["data"].as_array().unwrap().len(), 1);
    assert_eq!(acme.body["data"][0]["role"], "Engineer");
}

#[tokio::test]
async fn test_unknown_company_is_not_found() {
    let app = TestApp::new().await;
    let owner = app.token(Role::Owner);

    let get = app.request("GET", "/experiences/Initech", None, None).await;
    assert_eq!(get.status, StatusCode::NOT_FOUND);
    assert_eq!(get.error_code(), "COMPANY_NOT_FOUND");

    let delete = app
        .request("DELETE", "/experiences/Initech", None, Some(&owner))
        .await;
    assert_eq!(delete.status, StatusCode::NOT_FOUND);
    assert_eq!(delete.error_code(), "COMPANY_NOT_FOUND");
}

#[tokio::test]
async fn test_bulk_delete_requires_confirmation() {
    let app = TestApp::new().await;
    let owner = app.token(Role::Owner);
    for company in ["Acme", "Globex"] {
        app.request(
            "PUT",
            "/experiences",
            Some(helpers::experience_body("Engineer", company)),
            Some(&owner),
        )
        .await;
    }

    let refused = app.request("DELETE", "/experiences", None, Some(&owner)).await;
    assert_eq!(refused.status, StatusCode::BAD_REQUEST);
    assert_eq!(refused.error_code(), "CONFIRM_REQUIRED");

    let company = app
        .request("DELETE", "/experiences/Acme", None, Some(&owner))
        .await;
    assert_eq!(company.body["data"]["deleted_count"], 1);

    let confirmed = app
        .request("DELETE", "/experiences?confirm=true", None, Some(&owner))
        .await;
    assert_eq!(confirmed.status, StatusCode::OK);
    assert_eq!(confirmed.body["data"]["deleted_count"], 1);
}

#[tokio::test]
async fn test_maintainer_cannot_add_experience() {
    let app = TestApp::new().await;
    let maintainer = app.token(Role::Maintainer);

    let response = app
        .request(
            "PUT",
            "/experiences",
            Some(helpers::experience_body("Engineer", "Acme")),
            Some(&maintainer),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}
