//! Custom axum extractors for Folio

use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::json;
use validator::{Validate, ValidationErrors};

use crate::Error;

/// JSON extractor that validates the deserialized value automatically.
///
/// Replaces `Json<T>` + manual `.validate()` calls in handlers.
/// Requires `T: DeserializeOwned + Validate`.
///
/// All input errors return 400. Validation failures additionally carry a
/// `fields` map with one message per failing field, so a form client can
/// surface every error simultaneously.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

/// Rejection type for `ValidatedJson`:
/// - JSON deserialization errors → 400 (via `Error::Validation`)
/// - Validation errors → 400 with a per-field message map
#[derive(Debug)]
pub enum ValidatedJsonRejection {
    Json(JsonRejection),
    Validation(ValidationErrors),
}

impl IntoResponse for ValidatedJsonRejection {
    fn into_response(self) -> Response {
        match self {
            ValidatedJsonRejection::Json(e) => Error::Validation(e.body_text()).into_response(),
            ValidatedJsonRejection::Validation(errors) => {
                let fields: serde_json::Map<String, serde_json::Value> = errors
                    .field_errors()
                    .iter()
                    .map(|(field, field_errors)| {
                        let message = field_errors
                            .first()
                            .and_then(|e| e.message.as_ref())
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| format!("{} is invalid", field));
                        (field.to_string(), json!(message))
                    })
                    .collect();

                let body = Json(json!({
                    "error": {
                        "code": "VALIDATION_ERROR",
                        "message": "Validation failed",
                    },
                    "fields": fields,
                }));

                (StatusCode::BAD_REQUEST, body).into_response()
            }
        }
    }
}

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ValidatedJsonRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(ValidatedJsonRejection::Json)?;
        value
            .validate()
            .map_err(ValidatedJsonRejection::Validation)?;
        Ok(ValidatedJson(value))
    }
}
