//! HTTP Fallback Sink Implementation
//!
//! POSTs the message as a JSON body to the configured fallback endpoint.
//! Any 2xx response counts as delivered; the response body is ignored.

use uuid::Uuid;

use crate::{MessageReceipt, MessageSink, NewMessage, SinkError};

/// Fallback sink delivering messages over HTTP
pub struct HttpSink {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpSink {
    /// Create a new HTTP sink for the given endpoint
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait::async_trait]
impl MessageSink for HttpSink {
    async fn deliver(&self, message: NewMessage) -> Result<MessageReceipt, SinkError> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(&message)
            .send()
            .await
            .map_err(|e| SinkError::Http(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SinkError::Http(format!(
                "Fallback endpoint returned {}",
                status
            )));
        }

        tracing::debug!(endpoint = %self.endpoint, "Contact message forwarded");

        Ok(MessageReceipt {
            message_id: format!("http-{}", Uuid::new_v4()),
            accepted_at: chrono::Utc::now(),
            channel: self.channel().to_string(),
        })
    }

    fn channel(&self) -> &'static str {
        "http"
    }
}
