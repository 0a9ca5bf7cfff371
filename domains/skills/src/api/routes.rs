//! Route definitions for the Skills domain API

use axum::{routing::get, Router};

use super::handlers;
use super::middleware::SkillsState;

/// Create all Skills domain API routes
pub fn routes() -> Router<SkillsState> {
    Router::new().route("/v1/skills", get(handlers::list_skills))
}
