//! Project listing API handlers

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::domain::entities::Project;

use super::middleware::ProjectsState;

/// Query parameters for the project listing
#[derive(Debug, Default, Deserialize)]
pub struct ListProjectsQuery {
    /// Restrict the listing to featured projects
    #[serde(default)]
    pub featured: Option<bool>,
}

/// List catalog projects
///
/// **GET /v1/projects**
///
/// Returns the catalog in its authored order; `?featured=true` restricts
/// the listing to featured entries.
pub async fn list_projects(
    State(state): State<ProjectsState>,
    Query(query): Query<ListProjectsQuery>,
) -> Json<Vec<Project>> {
    let projects: Vec<Project> = match query.featured {
        Some(true) => state.catalog.featured().cloned().collect(),
        _ => state.catalog.projects().to_vec(),
    };

    Json(projects)
}
