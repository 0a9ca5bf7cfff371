//! Mock Repository Service Implementation
//!
//! Provides an in-memory repository listing for testing without hitting
//! the GitHub API. The listing contract (fork filtering, star ordering)
//! matches the real client; failures are programmable per test.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::{prepare_listing, GithubError, RepoSummary, RepoService};

/// Mock repository service for testing
#[derive(Clone)]
pub struct MockRepoService {
    username: String,
    repos: Arc<Mutex<Vec<RepoSummary>>>,
    failure: Arc<Mutex<Option<GithubError>>>,
    calls: Arc<AtomicUsize>,
    refresh_calls: Arc<AtomicUsize>,
}

impl MockRepoService {
    /// Create an empty mock service for the given account
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            repos: Arc::new(Mutex::new(Vec::new())),
            failure: Arc::new(Mutex::new(None)),
            calls: Arc::new(AtomicUsize::new(0)),
            refresh_calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Create a mock service pre-loaded with repositories
    pub fn with_repos(username: impl Into<String>, repos: Vec<RepoSummary>) -> Self {
        let service = Self::new(username);
        service.set_repos(repos);
        service
    }

    /// Replace the backing repository list
    pub fn set_repos(&self, repos: Vec<RepoSummary>) {
        *self.repos.lock().unwrap() = repos;
    }

    /// Make every subsequent listing call fail with the given error
    pub fn fail_with(&self, error: GithubError) {
        *self.failure.lock().unwrap() = Some(error);
    }

    /// Clear a programmed failure
    pub fn recover(&self) {
        *self.failure.lock().unwrap() = None;
    }

    /// Number of listing calls observed
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Number of listing calls that requested a refresh
    pub fn refresh_count(&self) -> usize {
        self.refresh_calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl RepoService for MockRepoService {
    async fn list_repos(&self, refresh: bool) -> Result<Vec<RepoSummary>, GithubError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if refresh {
            self.refresh_calls.fetch_add(1, Ordering::SeqCst);
        }

        if let Some(error) = self.failure.lock().unwrap().clone() {
            return Err(error);
        }

        Ok(prepare_listing(self.repos.lock().unwrap().clone()))
    }

    fn username(&self) -> &str {
        &self.username
    }
}
