//! Shared utilities, configuration, and error handling for Folio
//!
//! This crate provides common functionality used across the Folio application:
//! - Configuration management following 12-factor principles
//! - Error types and handling
//! - Display formatting helpers
//! - Request extractors

pub mod config;
pub mod error;
pub mod extractors;
pub mod format;

pub use config::Config;
pub use error::{Error, Result};
pub use extractors::ValidatedJson;
pub use format::{format_date, truncate_text};
