//! Route definitions for the Showcase domain API

use axum::{routing::get, Router};

use super::handlers;
use super::middleware::ShowcaseState;

/// Create all Showcase domain API routes
pub fn routes() -> Router<ShowcaseState> {
    Router::new().route("/v1/showcase/repos", get(handlers::list_repos))
}
