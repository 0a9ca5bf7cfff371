//! Route definitions for the Contact domain API

use axum::{routing::post, Router};

use super::handlers;
use super::middleware::ContactState;

/// Create all Contact domain API routes
pub fn routes() -> Router<ContactState> {
    Router::new().route("/v1/contact", post(handlers::submit_message))
}
