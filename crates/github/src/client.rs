//! GitHub REST API Implementation
//!
//! Calls the repository listing endpoint
//! (`GET /users/{username}/repos?per_page=N&sort=updated&type=public`)
//! using reqwest HTTP client.

use reqwest::{Client, StatusCode};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::{prepare_listing, GithubConfig, GithubError, RepoSummary, RepoService};

const DEFAULT_BASE_URL: &str = "https://api.github.com";
const ACCEPT: &str = "application/vnd.github.v3+json";
// GitHub rejects requests without a User-Agent
const USER_AGENT: &str = concat!("folio/", env!("CARGO_PKG_VERSION"));

/// GitHub repository service implementation
pub struct GithubClient {
    http: Client,
    config: GithubConfig,
    base_url: String,
}

impl GithubClient {
    /// Create a new GitHub client
    pub fn new(config: GithubConfig) -> Result<Self, GithubError> {
        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| GithubError::Configuration(format!("HTTP client build failed: {}", e)))?;

        Ok(Self {
            http,
            config,
            base_url,
        })
    }

    fn listing_url(&self, refresh: bool) -> String {
        let mut url = format!(
            "{}/users/{}/repos?per_page={}&sort=updated&type=public",
            self.base_url.trim_end_matches('/'),
            self.config.username,
            self.config.page_size
        );

        // Manual refresh busts any intermediate HTTP caches
        if refresh {
            let millis = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis())
                .unwrap_or(0);
            url.push_str(&format!("&_t={}", millis));
        }

        url
    }
}

/// Classify a non-success listing response by HTTP status
pub(crate) fn classify_status(status: StatusCode, username: &str) -> GithubError {
    match status {
        StatusCode::NOT_FOUND => GithubError::UserNotFound {
            username: username.to_string(),
        },
        StatusCode::FORBIDDEN => GithubError::RateLimited,
        status => GithubError::Api {
            status: status.as_u16(),
        },
    }
}

#[async_trait::async_trait]
impl RepoService for GithubClient {
    async fn list_repos(&self, refresh: bool) -> Result<Vec<RepoSummary>, GithubError> {
        let url = self.listing_url(refresh);

        tracing::debug!(username = %self.config.username, refresh, "Fetching GitHub repositories");

        let mut request = self.http.get(&url).header("Accept", ACCEPT);
        if let Some(token) = &self.config.token {
            request = request.header("Authorization", format!("token {}", token));
        }

        let response = request
            .send()
            .await
            .map_err(|e| GithubError::Request(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(classify_status(status, &self.config.username));
        }

        let repos: Vec<RepoSummary> = response
            .json()
            .await
            .map_err(|e| GithubError::Response(format!("Failed to parse response: {}", e)))?;

        let listing = prepare_listing(repos);
        tracing::debug!(count = listing.len(), "GitHub repositories fetched");
        Ok(listing)
    }

    fn username(&self) -> &str {
        &self.config.username
    }
}
