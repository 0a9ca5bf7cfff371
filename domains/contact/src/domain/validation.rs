//! Validation rules for the contact form
//!
//! Pure functions over the three text fields. Every rule is evaluated
//! independently so a submission reports all of its field errors at once.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

lazy_static! {
    /// Email shape: no whitespace or extra '@' on either side, and a dot
    /// somewhere in the domain part
    pub static ref EMAIL_REGEX: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
}

/// Minimum length of a trimmed message
pub const MIN_MESSAGE_LEN: usize = 10;

/// Validate email format
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Per-field error messages; `None` means the field passed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }

    pub fn count(&self) -> usize {
        [self.name, self.email, self.message]
            .iter()
            .filter(|e| e.is_some())
            .count()
    }
}

pub fn validate_name(name: &str) -> Option<&'static str> {
    if name.trim().is_empty() {
        return Some("Name is required");
    }
    None
}

pub fn validate_email(email: &str) -> Option<&'static str> {
    if email.trim().is_empty() {
        return Some("Email is required");
    }
    if !is_valid_email(email) {
        return Some("Please enter a valid email");
    }
    None
}

pub fn validate_message(message: &str) -> Option<&'static str> {
    let trimmed = message.trim();
    if trimmed.is_empty() {
        return Some("Message is required");
    }
    if trimmed.chars().count() < MIN_MESSAGE_LEN {
        return Some("Message must be at least 10 characters long");
    }
    None
}

/// Validate all three fields, reporting every failure simultaneously
pub fn validate_form(name: &str, email: &str, message: &str) -> FieldErrors {
    FieldErrors {
        name: validate_name(name),
        email: validate_email(email),
        message: validate_message(message),
    }
}
