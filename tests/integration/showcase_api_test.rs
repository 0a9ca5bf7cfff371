//! End-to-end tests for the repository showcase listing

mod common;

use axum::http::StatusCode;

use common::{expect_json, repo, TestApp};
use folio_github::GithubError;

#[tokio::test]
async fn test_listing_excludes_forks_and_sorts_by_stars() {
    let app = TestApp::new();
    app.repos.set_repos(vec![
        repo(1, "small", 2, false),
        repo(2, "popular-fork", 500, true),
        repo(3, "big", 40, false),
        repo(4, "mid", 7, false),
    ]);

    let response = app.get("/v1/showcase/repos").await;
    let body = expect_json(response, StatusCode::OK).await;

    assert_eq!(body["username"], "octocat");
    assert_eq!(body["count"], 3);

    let names: Vec<&str> = body["repos"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["big", "mid", "small"]);

    // Projection fields come through for the cards
    assert_eq!(body["repos"][0]["language_color"], "#000000");
    assert_eq!(body["repos"][0]["updated_label"], "June 1, 2024");
}

#[tokio::test]
async fn test_unknown_user_maps_to_404_with_username() {
    let app = TestApp::new();
    app.repos.fail_with(GithubError::UserNotFound {
        username: "octocat".to_string(),
    });

    let response = app.get("/v1/showcase/repos").await;
    let body = expect_json(response, StatusCode::NOT_FOUND).await;
    assert!(body["error"]["message"].as_str().unwrap().contains("octocat"));
}

#[tokio::test]
async fn test_rate_limit_maps_to_429() {
    let app = TestApp::new();
    app.repos.fail_with(GithubError::RateLimited);

    let response = app.get("/v1/showcase/repos").await;
    let body = expect_json(response, StatusCode::TOO_MANY_REQUESTS).await;
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("rate limit"));
}

#[tokio::test]
async fn test_other_upstream_errors_map_to_502() {
    let app = TestApp::new();
    app.repos.fail_with(GithubError::Api { status: 500 });

    let response = app.get("/v1/showcase/repos").await;
    let body = expect_json(response, StatusCode::BAD_GATEWAY).await;
    assert!(body["error"]["message"].as_str().unwrap().contains("500"));
}

#[tokio::test]
async fn test_manual_refresh_reaches_the_service() {
    let app = TestApp::new();
    app.repos.set_repos(vec![repo(1, "folio", 1, false)]);

    let response = app.get("/v1/showcase/repos?refresh=true").await;
    assert_eq!(response.status(), StatusCode::OK);

    assert_eq!(app.repos.call_count(), 1);
    assert_eq!(app.repos.refresh_count(), 1);
}
