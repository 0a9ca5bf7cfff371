//! Mock Sink Implementation
//!
//! Captures delivered messages in memory for assertions and supports
//! programmable failures for exercising the error path of the pipeline.

use std::sync::{Arc, Mutex};

use chrono::Utc;
use uuid::Uuid;

use crate::{MessageReceipt, MessageSink, NewMessage, SinkError};

/// Mock message sink for testing
#[derive(Debug, Clone)]
pub struct MockSink {
    delivered: Arc<Mutex<Vec<NewMessage>>>,
    failure: Arc<Mutex<Option<SinkError>>>,
}

impl MockSink {
    /// Create a new mock sink
    pub fn new() -> Self {
        Self {
            delivered: Arc::new(Mutex::new(Vec::new())),
            failure: Arc::new(Mutex::new(None)),
        }
    }

    /// Make every subsequent delivery fail with the given error
    pub fn fail_with(&self, error: SinkError) {
        *self.failure.lock().unwrap() = Some(error);
    }

    /// Clear a programmed failure
    pub fn recover(&self) {
        *self.failure.lock().unwrap() = None;
    }

    /// All messages captured so far
    pub fn delivered(&self) -> Vec<NewMessage> {
        self.delivered.lock().unwrap().clone()
    }

    /// Number of captured messages
    pub fn delivery_count(&self) -> usize {
        self.delivered.lock().unwrap().len()
    }
}

impl Default for MockSink {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl MessageSink for MockSink {
    async fn deliver(&self, message: NewMessage) -> Result<MessageReceipt, SinkError> {
        if let Some(error) = self.failure.lock().unwrap().clone() {
            tracing::warn!("Mock sink failing delivery as programmed");
            return Err(error);
        }

        tracing::info!(from = %message.email, "Mock sink capturing contact message");
        self.delivered.lock().unwrap().push(message);

        Ok(MessageReceipt {
            message_id: format!("mock-{}", Uuid::new_v4()),
            accepted_at: Utc::now(),
            channel: self.channel().to_string(),
        })
    }

    fn channel(&self) -> &'static str {
        "mock"
    }
}
