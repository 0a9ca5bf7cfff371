//! Route definitions for the Projects domain API

use axum::{routing::get, Router};

use super::handlers;
use super::middleware::ProjectsState;

/// Create all Projects domain API routes
pub fn routes() -> Router<ProjectsState> {
    Router::new().route("/v1/projects", get(handlers::list_projects))
}
