//! Skills domain: proficiency catalog grouped by category

pub mod api;
pub mod catalog;
pub mod domain;

// Re-export domain types at the crate root for convenience
pub use catalog::SkillCatalog;
pub use domain::entities::{group_by_category, Skill, SkillCategory, SkillLevel};

// Re-export API types
pub use api::routes;
pub use api::SkillsState;
