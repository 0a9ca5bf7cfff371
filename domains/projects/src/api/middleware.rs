//! Projects domain state

use std::sync::Arc;

use crate::catalog::ProjectCatalog;

/// Application state for the Projects domain
#[derive(Clone)]
pub struct ProjectsState {
    pub catalog: Arc<ProjectCatalog>,
}
