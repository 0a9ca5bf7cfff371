//! Contact submission API handlers

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use folio_common::{Error, Result, ValidatedJson};
use folio_delivery::NewMessage;

use crate::domain::form::SUBMIT_FAILED_MESSAGE;
use crate::domain::validation;

/// Request for submitting a contact message.
///
/// The custom rules delegate to the domain validation so the API reports
/// the exact same field messages as the form, all at once.
#[derive(Debug, Deserialize, Validate)]
pub struct ContactRequest {
    #[validate(custom(function = "name_rule"))]
    pub name: String,

    #[validate(custom(function = "email_rule"))]
    pub email: String,

    #[validate(custom(function = "message_rule"))]
    pub message: String,
}

fn name_rule(value: &str) -> std::result::Result<(), ValidationError> {
    field_rule(validation::validate_name(value))
}

fn email_rule(value: &str) -> std::result::Result<(), ValidationError> {
    field_rule(validation::validate_email(value))
}

fn message_rule(value: &str) -> std::result::Result<(), ValidationError> {
    field_rule(validation::validate_message(value))
}

fn field_rule(outcome: Option<&'static str>) -> std::result::Result<(), ValidationError> {
    match outcome {
        Some(message) => {
            let mut error = ValidationError::new("invalid");
            error.message = Some(message.into());
            Err(error)
        }
        None => Ok(()),
    }
}

/// Delivery receipt returned on success
#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub message_id: String,
    pub channel: String,
}

/// Submit a contact message
///
/// **POST /v1/contact**
///
/// Validates the three fields, then delivers through the configured sink.
/// Delivery failure surfaces as a generic transport error; there is no
/// automatic retry.
pub async fn submit_message(
    State(state): State<super::middleware::ContactState>,
    ValidatedJson(request): ValidatedJson<ContactRequest>,
) -> Result<(StatusCode, Json<ContactResponse>)> {
    let message = NewMessage {
        name: request.name,
        email: request.email,
        message: request.message,
    };

    let receipt = state.sink.deliver(message).await.map_err(|e| {
        tracing::error!(error = %e, channel = state.sink.channel(), "Contact delivery failed");
        Error::Upstream(SUBMIT_FAILED_MESSAGE.to_string())
    })?;

    Ok((
        StatusCode::CREATED,
        Json(ContactResponse {
            message_id: receipt.message_id,
            channel: receipt.channel,
        }),
    ))
}
