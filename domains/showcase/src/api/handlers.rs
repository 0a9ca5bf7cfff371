//! Repository showcase API handlers

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use folio_common::{Error, Result};
use folio_github::GithubError;

use crate::domain::entities::RepoView;

use super::middleware::ShowcaseState;

/// Query parameters for the repository listing
#[derive(Debug, Default, Deserialize)]
pub struct ListReposQuery {
    /// User-triggered re-fetch; bypasses intermediate caches
    #[serde(default)]
    pub refresh: Option<bool>,
}

/// Repository listing response
#[derive(Debug, Serialize)]
pub struct ShowcaseResponse {
    pub username: String,
    pub count: usize,
    pub repos: Vec<RepoView>,
}

/// List public, non-fork repositories sorted by stars
///
/// **GET /v1/showcase/repos**
///
/// Failures are classified by the upstream status: unknown user → 404,
/// rate limited → 429, anything else → 502. All are recoverable with a
/// manual retry (`?refresh=true`).
pub async fn list_repos(
    State(state): State<ShowcaseState>,
    Query(query): Query<ListReposQuery>,
) -> Result<Json<ShowcaseResponse>> {
    let refresh = query.refresh.unwrap_or(false);

    tracing::debug!(username = state.repos.username(), refresh, "Listing showcase repositories");

    let repos = state
        .repos
        .list_repos(refresh)
        .await
        .map_err(classify_upstream)?;

    let response = ShowcaseResponse {
        username: state.repos.username().to_string(),
        count: repos.len(),
        repos: repos.into_iter().map(RepoView::from).collect(),
    };

    Ok(Json(response))
}

fn classify_upstream(error: GithubError) -> Error {
    match &error {
        GithubError::UserNotFound { .. } => Error::NotFound(error.to_string()),
        GithubError::RateLimited => Error::RateLimit(error.to_string()),
        GithubError::Configuration(_) => Error::Internal(error.to_string()),
        GithubError::Api { .. } | GithubError::Request(_) | GithubError::Response(_) => {
            Error::Upstream(error.to_string())
        }
    }
}
