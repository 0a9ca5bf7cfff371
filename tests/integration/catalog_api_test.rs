//! End-to-end tests for the project and skill catalog listings

mod common;

use axum::http::StatusCode;

use common::{expect_json, TestApp};

#[tokio::test]
async fn test_project_listing_in_catalog_order() {
    let app = TestApp::new();

    let response = app.get("/v1/projects").await;
    let body = expect_json(response, StatusCode::OK).await;

    let projects = body.as_array().unwrap();
    assert_eq!(projects.len(), 2);
    assert_eq!(projects[0]["id"], "folio");
    // MediaSet serializes as a plain list even for single-image projects
    assert_eq!(projects[1]["image"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_project_listing_featured_filter() {
    let app = TestApp::new();

    let response = app.get("/v1/projects?featured=true").await;
    let body = expect_json(response, StatusCode::OK).await;

    let projects = body.as_array().unwrap();
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0]["id"], "folio");
    assert_eq!(projects[0]["featured"], true);
}

#[tokio::test]
async fn test_skill_listing_grouped_with_display_attributes() {
    let app = TestApp::new();

    let response = app.get("/v1/skills").await;
    let body = expect_json(response, StatusCode::OK).await;

    let groups = body.as_array().unwrap();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0]["category"], "Languages");
    assert_eq!(groups[0]["skills"][0]["name"], "Rust");
    assert_eq!(groups[0]["skills"][0]["weight"], 90);
    assert_eq!(groups[0]["skills"][0]["color"], "green");
    assert_eq!(groups[0]["skills"][1]["weight"], 50);
    assert_eq!(groups[1]["category"], "Storage");
}
