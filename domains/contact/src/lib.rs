//! Contact domain: form validation and submission pipeline

pub mod api;
pub mod domain;

// Re-export domain types at the crate root for convenience
pub use domain::form::{ContactForm, SubmissionPhase, SUBMIT_FAILED_MESSAGE};
pub use domain::validation::{
    is_valid_email, validate_email, validate_form, validate_message, validate_name, FieldErrors,
};

// Re-export API types
pub use api::routes;
pub use api::ContactState;
