//! Skills domain state

use std::sync::Arc;

use crate::catalog::SkillCatalog;

/// Application state for the Skills domain
#[derive(Clone)]
pub struct SkillsState {
    pub catalog: Arc<SkillCatalog>,
}
