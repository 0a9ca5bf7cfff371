//! Folio GitHub Service
//!
//! Provides the repository listing behind the GitHub showcase page:
//! - Real GitHub REST API client for production
//! - Mock repository service for testing and development
//! - Status-code error classification (user missing, rate limited, other)
//! - Fork filtering and star-count ordering shared by every implementation

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod client;
pub mod mock;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GithubError {
    #[error("GitHub configuration error: {0}")]
    Configuration(String),

    #[error("GitHub user \"{username}\" not found")]
    UserNotFound { username: String },

    #[error("GitHub API rate limit exceeded. Please try again later or add a GitHub token.")]
    RateLimited,

    #[error("GitHub API error: {status}")]
    Api { status: u16 },

    #[error("GitHub request error: {0}")]
    Request(String),

    #[error("GitHub response error: {0}")]
    Response(String),
}

/// Read-only projection of a repository as returned by the listing API.
///
/// Field names follow the GitHub REST wire format so the struct
/// deserializes straight from the response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepoSummary {
    pub id: u64,
    pub name: String,
    pub full_name: String,
    pub description: Option<String>,
    pub html_url: String,
    pub stargazers_count: i64,
    pub language: Option<String>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub topics: Vec<String>,
    pub fork: bool,
}

/// GitHub service configuration
#[derive(Debug, Clone)]
pub struct GithubConfig {
    /// Service provider (github, mock)
    pub provider: String,
    /// Account whose public repositories are listed
    pub username: String,
    /// Optional token; raises rate limits, absence is not an error
    pub token: Option<String>,
    /// Override for the API base URL (used in tests)
    pub base_url: Option<String>,
    /// Page size for the listing request
    pub page_size: u8,
}

impl GithubConfig {
    /// Create GitHub config from environment variables
    pub fn from_env() -> Result<Self, GithubError> {
        dotenvy::dotenv().ok();

        let provider = std::env::var("SHOWCASE_PROVIDER").unwrap_or_else(|_| "github".to_string());
        let username = std::env::var("GITHUB_USERNAME").unwrap_or_else(|_| "octocat".to_string());
        let token = std::env::var("GITHUB_TOKEN").ok().filter(|t| !t.is_empty());
        let base_url = std::env::var("GITHUB_API_BASE_URL").ok();

        let page_size = std::env::var("GITHUB_PAGE_SIZE")
            .unwrap_or_else(|_| "12".to_string())
            .parse()
            .unwrap_or(12);

        Ok(Self {
            provider,
            username,
            token,
            base_url,
            page_size,
        })
    }
}

/// Repository listing service trait for different implementations
#[async_trait::async_trait]
pub trait RepoService: Send + Sync {
    /// List public, non-fork repositories sorted by star count descending.
    ///
    /// `refresh` marks a user-triggered re-fetch; implementations bypass
    /// any intermediate caches (the real client appends a cache-busting
    /// query parameter).
    async fn list_repos(&self, refresh: bool) -> Result<Vec<RepoSummary>, GithubError>;

    /// The account handle this service lists repositories for
    fn username(&self) -> &str;
}

/// Drop forks and order by star count descending.
///
/// The listing endpoint sorts by update time server-side; the showcase
/// re-sorts by stars. The sort is stable, so equally-starred entries keep
/// their server order.
pub fn prepare_listing(mut repos: Vec<RepoSummary>) -> Vec<RepoSummary> {
    repos.retain(|repo| !repo.fork);
    repos.sort_by(|a, b| b.stargazers_count.cmp(&a.stargazers_count));
    repos
}

/// Factory for creating RepoService implementations
pub struct GithubServiceFactory;

impl GithubServiceFactory {
    /// Create a repository service based on configuration
    pub fn create(config: GithubConfig) -> Result<Box<dyn RepoService>, GithubError> {
        match config.provider.as_str() {
            "github" => {
                tracing::info!(username = %config.username, "Creating GitHub repository service");
                Ok(Box::new(client::GithubClient::new(config)?))
            }
            "mock" => {
                tracing::info!("Creating mock repository service");
                Ok(Box::new(mock::MockRepoService::new(config.username)))
            }
            provider => Err(GithubError::Configuration(format!(
                "Unknown showcase provider: {}. Supported providers: github, mock",
                provider
            ))),
        }
    }
}
