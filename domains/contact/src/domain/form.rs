//! Contact form submission state machine
//!
//! The form holds the three text fields, per-field validation errors, and
//! a submission phase. Exactly one of {validation errors, in-flight,
//! success, transport error} is presented at any time, and at most one
//! delivery is outstanding.

use folio_delivery::{MessageSink, NewMessage};

use crate::domain::validation::{validate_form, FieldErrors};

/// Fixed user-facing message for any delivery failure
pub const SUBMIT_FAILED_MESSAGE: &str = "Failed to send message. Please try again later.";

/// Lifecycle of a submission attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

/// Contact form state
#[derive(Debug, Default)]
pub struct ContactForm {
    name: String,
    email: String,
    message: String,
    field_errors: FieldErrors,
    phase: SubmissionPhase,
    error_message: Option<&'static str>,
}

impl ContactForm {
    /// Create an empty form
    pub fn new() -> Self {
        Self::default()
    }

    /// Edit the name field. Editing clears the field's validation error
    /// immediately; a submission-level error stays until the next attempt.
    pub fn set_name(&mut self, value: impl Into<String>) {
        self.name = value.into();
        self.field_errors.name = None;
    }

    /// Edit the email field (see `set_name` for error-clearing behavior)
    pub fn set_email(&mut self, value: impl Into<String>) {
        self.email = value.into();
        self.field_errors.email = None;
    }

    /// Edit the message field (see `set_name` for error-clearing behavior)
    pub fn set_message(&mut self, value: impl Into<String>) {
        self.message = value.into();
        self.field_errors.message = None;
    }

    /// Attempt a submission through the given sink.
    ///
    /// Validation runs first and blocks delivery when any field fails; all
    /// failing fields are reported together and the phase is untouched.
    /// On delivery success the form is cleared; on failure the entered
    /// values are preserved for a retry.
    pub async fn submit(&mut self, sink: &dyn MessageSink) {
        // The submit control is disabled while a delivery is outstanding
        if self.phase == SubmissionPhase::Submitting {
            return;
        }

        let errors = validate_form(&self.name, &self.email, &self.message);
        self.field_errors = errors;
        if !errors.is_empty() {
            return;
        }

        self.phase = SubmissionPhase::Submitting;
        self.error_message = None;

        let message = NewMessage {
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
        };

        match sink.deliver(message).await {
            Ok(receipt) => {
                tracing::info!(message_id = %receipt.message_id, channel = %receipt.channel, "Contact message sent");
                self.phase = SubmissionPhase::Success;
                self.name.clear();
                self.email.clear();
                self.message.clear();
                self.field_errors = FieldErrors::default();
            }
            Err(e) => {
                tracing::error!(error = %e, "Contact message delivery failed");
                self.phase = SubmissionPhase::Error;
                self.error_message = Some(SUBMIT_FAILED_MESSAGE);
            }
        }
    }

    /// Return to the initial empty state ("send another message")
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn field_errors(&self) -> &FieldErrors {
        &self.field_errors
    }

    pub fn error_message(&self) -> Option<&'static str> {
        self.error_message
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_delivery::mock::MockSink;
    use folio_delivery::SinkError;

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::new();
        form.set_name("Jane");
        form.set_email("jane@x.com");
        form.set_message("Hello there friend");
        form
    }

    #[tokio::test]
    async fn test_successful_submission_clears_the_form() {
        let sink = MockSink::new();
        let mut form = filled_form();

        form.submit(&sink).await;

        assert_eq!(form.phase(), SubmissionPhase::Success);
        assert_eq!(form.name(), "");
        assert_eq!(form.email(), "");
        assert_eq!(form.message(), "");
        assert!(form.field_errors().is_empty());

        let delivered = sink.delivered();
        assert_eq!(delivered.len(), 1);
        assert_eq!(delivered[0].name, "Jane");
        assert_eq!(delivered[0].email, "jane@x.com");
    }

    #[tokio::test]
    async fn test_failed_delivery_preserves_entered_values() {
        let sink = MockSink::new();
        sink.fail_with(SinkError::Store("primary store unavailable".to_string()));
        let mut form = filled_form();

        form.submit(&sink).await;

        assert_eq!(form.phase(), SubmissionPhase::Error);
        assert_eq!(form.error_message(), Some(SUBMIT_FAILED_MESSAGE));
        assert_eq!(form.name(), "Jane");
        assert_eq!(form.email(), "jane@x.com");
        assert_eq!(form.message(), "Hello there friend");
    }

    #[tokio::test]
    async fn test_validation_errors_block_delivery() {
        let sink = MockSink::new();
        let mut form = ContactForm::new();

        form.submit(&sink).await;

        assert_eq!(form.phase(), SubmissionPhase::Idle);
        assert_eq!(form.field_errors().count(), 3);
        assert_eq!(sink.delivery_count(), 0);
    }

    #[tokio::test]
    async fn test_editing_clears_only_that_field_error() {
        let sink = MockSink::new();
        let mut form = ContactForm::new();
        form.submit(&sink).await;
        assert_eq!(form.field_errors().count(), 3);

        form.set_name("Jane");

        let errors = form.field_errors();
        assert_eq!(errors.name, None);
        assert!(errors.email.is_some());
        assert!(errors.message.is_some());
    }

    #[tokio::test]
    async fn test_editing_keeps_the_submission_error() {
        let sink = MockSink::new();
        sink.fail_with(SinkError::Http("endpoint down".to_string()));
        let mut form = filled_form();
        form.submit(&sink).await;
        assert_eq!(form.phase(), SubmissionPhase::Error);

        form.set_message("A different message entirely");
        assert_eq!(form.error_message(), Some(SUBMIT_FAILED_MESSAGE));
    }

    #[tokio::test]
    async fn test_retry_after_failure_succeeds() {
        let sink = MockSink::new();
        sink.fail_with(SinkError::Http("endpoint down".to_string()));
        let mut form = filled_form();
        form.submit(&sink).await;
        assert_eq!(form.phase(), SubmissionPhase::Error);

        sink.recover();
        form.submit(&sink).await;

        assert_eq!(form.phase(), SubmissionPhase::Success);
        assert_eq!(sink.delivery_count(), 1);
    }

    #[tokio::test]
    async fn test_reset_returns_to_initial_state() {
        let sink = MockSink::new();
        let mut form = filled_form();
        form.submit(&sink).await;
        assert_eq!(form.phase(), SubmissionPhase::Success);

        form.reset();
        assert_eq!(form.phase(), SubmissionPhase::Idle);
        assert_eq!(form.name(), "");
        assert!(form.error_message().is_none());
    }
}
