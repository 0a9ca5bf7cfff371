//! Folio Contact Delivery Service
//!
//! Persists contact-form messages with support for:
//! - Primary document store (Postgres) for production
//! - HTTP fallback endpoint when no store is configured
//! - Mock sink for testing and development
//!
//! The submission pipeline only ever sees the `MessageSink` capability;
//! which channel backs it is a configuration decision made once at startup.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use thiserror::Error;

pub mod http;
pub mod mock;
pub mod store;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SinkError {
    #[error("Contact delivery configuration error: {0}")]
    Configuration(String),

    #[error("Contact store error: {0}")]
    Store(String),

    #[error("Contact fallback error: {0}")]
    Http(String),
}

/// A validated contact message ready for delivery
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Delivery receipt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageReceipt {
    pub message_id: String,
    pub accepted_at: DateTime<Utc>,
    pub channel: String,
}

/// Delivery service configuration
#[derive(Debug, Clone)]
pub struct SinkConfig {
    /// Delivery provider (store, http, mock)
    pub provider: String,
    /// Endpoint used by the HTTP fallback provider
    pub fallback_url: String,
}

impl SinkConfig {
    /// Create delivery config from environment variables
    pub fn from_env() -> Result<Self, SinkError> {
        dotenvy::dotenv().ok();

        let provider = std::env::var("CONTACT_PROVIDER").unwrap_or_else(|_| "http".to_string());
        let fallback_url = std::env::var("CONTACT_FALLBACK_URL")
            .unwrap_or_else(|_| "http://localhost:3000/api/contact".to_string());

        Ok(Self {
            provider,
            fallback_url,
        })
    }
}

/// Message sink trait for the different delivery channels
#[async_trait::async_trait]
pub trait MessageSink: Send + Sync {
    /// Deliver one message. No retry, no partial-write semantics:
    /// the caller treats any error as a generic transport failure.
    async fn deliver(&self, message: NewMessage) -> Result<MessageReceipt, SinkError>;

    /// Short channel name for logging and receipts
    fn channel(&self) -> &'static str;
}

/// Message sink factory
pub struct SinkFactory;

impl SinkFactory {
    /// Create a message sink based on configuration.
    ///
    /// The store provider requires a database pool; the HTTP fallback and
    /// mock providers ignore it.
    pub fn create(
        config: SinkConfig,
        pool: Option<PgPool>,
    ) -> Result<Box<dyn MessageSink>, SinkError> {
        match config.provider.as_str() {
            "store" => {
                let pool = pool.ok_or_else(|| {
                    SinkError::Configuration(
                        "DATABASE_URL is required for the store provider".to_string(),
                    )
                })?;
                tracing::info!("Creating document store message sink");
                Ok(Box::new(store::StoreSink::new(pool)))
            }
            "http" => {
                tracing::info!(endpoint = %config.fallback_url, "Creating HTTP fallback message sink");
                Ok(Box::new(http::HttpSink::new(config.fallback_url)))
            }
            "mock" => {
                tracing::info!("Creating mock message sink");
                Ok(Box::new(mock::MockSink::new()))
            }
            provider => Err(SinkError::Configuration(format!(
                "Unknown contact provider: {}. Supported providers: store, http, mock",
                provider
            ))),
        }
    }
}
