//! API layer for the Showcase domain

pub mod handlers;
pub mod middleware;
pub mod routes;

pub use middleware::ShowcaseState;
pub use routes::routes;
