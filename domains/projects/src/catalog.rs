//! Static project catalog
//!
//! Projects are a static JSON document loaded once at startup and held
//! read-only for the lifetime of the process.

use std::path::Path;

use folio_common::{Error, Result};

use crate::domain::entities::Project;

/// Read-only, validated project catalog
#[derive(Debug, Clone)]
pub struct ProjectCatalog {
    projects: Vec<Project>,
}

impl ProjectCatalog {
    /// Load and validate the catalog from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            Error::Internal(format!(
                "Failed to read project catalog {}: {}",
                path.display(),
                e
            ))
        })?;

        let catalog = Self::parse(&raw)?;
        tracing::info!(count = catalog.len(), path = %path.display(), "Project catalog loaded");
        Ok(catalog)
    }

    /// Parse and validate a catalog from raw JSON
    pub fn parse(raw: &str) -> Result<Self> {
        let projects: Vec<Project> = serde_json::from_str(raw)?;

        for project in &projects {
            project.validate()?;
        }

        // Duplicate ids are a data error, caught at startup
        for (i, project) in projects.iter().enumerate() {
            if projects[..i].iter().any(|p| p.id == project.id) {
                return Err(Error::Validation(format!(
                    "Duplicate project id '{}' in catalog",
                    project.id
                )));
            }
        }

        Ok(Self { projects })
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn featured(&self) -> impl Iterator<Item = &Project> {
        self.projects.iter().filter(|p| p.featured)
    }

    pub fn get(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}
