//! Common test utilities and fixtures for integration tests
//!
//! Builds the full application router against mock services so tests can
//! drive the API end-to-end with `tower::ServiceExt::oneshot`, without a
//! database or network access.

// Not every test binary uses every helper
#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, Response, StatusCode};
use axum::Router;
use chrono::{TimeZone, Utc};
use tower::ServiceExt;

use folio_contact::ContactState;
use folio_delivery::mock::MockSink;
use folio_github::mock::MockRepoService;
use folio_github::RepoSummary;
use folio_projects::{ProjectCatalog, ProjectsState};
use folio_showcase::ShowcaseState;
use folio_skills::{SkillCatalog, SkillsState};

const PROJECTS_JSON: &str = r#"[
    {
        "id": "folio",
        "title": "Folio",
        "description": "Portfolio service",
        "technologies": ["Rust", "Axum"],
        "github": "https://github.com/octocat/folio",
        "image": ["/images/folio-1.png", "/images/folio-2.png"],
        "featured": true
    },
    {
        "id": "pantry",
        "title": "Pantry",
        "description": "A tiny cache",
        "technologies": ["Rust"],
        "image": "/images/pantry.png"
    }
]"#;

const SKILLS_JSON: &str = r#"[
    {"name": "Rust", "level": "Advanced", "icon": "rust", "category": "Languages"},
    {"name": "Go", "level": "Beginner", "icon": "go", "category": "Languages"},
    {"name": "Postgres", "level": "Intermediate", "icon": "postgres", "category": "Storage"}
]"#;

/// Test application wired to mock services
pub struct TestApp {
    pub router: Router,
    pub sink: MockSink,
    pub repos: MockRepoService,
}

impl TestApp {
    /// Build the app with empty mock state
    pub fn new() -> Self {
        let project_catalog =
            Arc::new(ProjectCatalog::parse(PROJECTS_JSON).expect("project fixture parses"));
        let skill_catalog = Arc::new(SkillCatalog::parse(SKILLS_JSON).expect("skill fixture parses"));

        let sink = MockSink::new();
        let repos = MockRepoService::new("octocat");

        let router = Router::new()
            .merge(folio_projects::routes().with_state(ProjectsState {
                catalog: project_catalog,
            }))
            .merge(folio_skills::routes().with_state(SkillsState {
                catalog: skill_catalog,
            }))
            .merge(folio_contact::routes().with_state(ContactState {
                sink: Arc::new(sink.clone()),
            }))
            .merge(folio_showcase::routes().with_state(ShowcaseState {
                repos: Arc::new(repos.clone()),
            }));

        Self {
            router,
            sink,
            repos,
        }
    }

    /// Drive one GET request through the router
    pub async fn get(&self, uri: &str) -> Response<Body> {
        let request = Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .expect("request builds");

        self.router.clone().oneshot(request).await.expect("router responds")
    }

    /// Drive one JSON POST request through the router
    pub async fn post_json(&self, uri: &str, body: serde_json::Value) -> Response<Body> {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request builds");

        self.router.clone().oneshot(request).await.expect("router responds")
    }
}

/// Read a response body as JSON
pub async fn response_json(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body reads");
    serde_json::from_slice(&bytes).expect("body is JSON")
}

/// Assert a status and return the parsed body
pub async fn expect_json(response: Response<Body>, status: StatusCode) -> serde_json::Value {
    assert_eq!(response.status(), status);
    response_json(response).await
}

/// Repository fixture in the GitHub wire shape
pub fn repo(id: u64, name: &str, stars: i64, fork: bool) -> RepoSummary {
    RepoSummary {
        id,
        name: name.to_string(),
        full_name: format!("octocat/{}", name),
        description: Some(format!("{} description", name)),
        html_url: format!("https://github.com/octocat/{}", name),
        stargazers_count: stars,
        language: Some("Rust".to_string()),
        updated_at: Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
        topics: vec!["rust".to_string()],
        fork,
    }
}
