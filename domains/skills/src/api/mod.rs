//! API layer for the Skills domain

pub mod handlers;
pub mod middleware;
pub mod routes;

pub use middleware::SkillsState;
pub use routes::routes;
