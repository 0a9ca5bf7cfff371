//! Showcase domain: GitHub repository listing page

pub mod api;
pub mod domain;

// Re-export domain types at the crate root for convenience
pub use domain::entities::{language_color, RepoView, MAX_TOPICS};

// Re-export API types
pub use api::routes;
pub use api::ShowcaseState;
