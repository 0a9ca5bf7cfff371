//! Static skill catalog

use std::path::Path;

use folio_common::{Error, Result};

use crate::domain::entities::Skill;

/// Read-only skill catalog loaded once at startup
#[derive(Debug, Clone)]
pub struct SkillCatalog {
    skills: Vec<Skill>,
}

impl SkillCatalog {
    /// Load the catalog from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            Error::Internal(format!(
                "Failed to read skill catalog {}: {}",
                path.display(),
                e
            ))
        })?;

        let catalog = Self::parse(&raw)?;
        tracing::info!(count = catalog.len(), path = %path.display(), "Skill catalog loaded");
        Ok(catalog)
    }

    /// Parse a catalog from raw JSON
    pub fn parse(raw: &str) -> Result<Self> {
        let skills: Vec<Skill> = serde_json::from_str(raw)?;
        Ok(Self { skills })
    }

    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }
}
