//! Projects domain: project catalog, carousel/zoom playback

pub mod api;
pub mod catalog;
pub mod domain;
pub mod playback;

// Re-export domain types at the crate root for convenience
pub use catalog::ProjectCatalog;
pub use domain::entities::{MediaSet, Project, PLACEHOLDER_IMAGE};
pub use domain::state::{CardState, CarouselState, Direction, StateError, ZoomState};
pub use playback::{CardPlayback, SLIDESHOW_INTERVAL};

// Re-export API types
pub use api::routes;
pub use api::ProjectsState;
