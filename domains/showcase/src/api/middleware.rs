//! Showcase domain state

use std::sync::Arc;

use folio_github::RepoService;

/// Application state for the Showcase domain
#[derive(Clone)]
pub struct ShowcaseState {
    pub repos: Arc<dyn RepoService>,
}
