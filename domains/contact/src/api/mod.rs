//! API layer for the Contact domain

pub mod handlers;
pub mod middleware;
pub mod routes;

pub use middleware::ContactState;
pub use routes::routes;
