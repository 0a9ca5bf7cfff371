//! Document Store Sink Implementation
//!
//! Writes contact messages into the `messages` collection (Postgres table)
//! with a server-side timestamp and a `new` status, matching the record
//! shape reviewed from the inbox tooling.

use sqlx::PgPool;
use uuid::Uuid;

use crate::{MessageReceipt, MessageSink, NewMessage, SinkError};

/// Primary store sink backed by Postgres
#[derive(Clone)]
pub struct StoreSink {
    pool: PgPool,
}

impl StoreSink {
    /// Create a new store sink on an existing pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Run the `messages` table migrations
    pub async fn migrate(pool: &PgPool) -> Result<(), SinkError> {
        sqlx::migrate!("./migrations")
            .run(pool)
            .await
            .map_err(|e| SinkError::Configuration(format!("Migration failed: {}", e)))
    }
}

#[async_trait::async_trait]
impl MessageSink for StoreSink {
    async fn deliver(&self, message: NewMessage) -> Result<MessageReceipt, SinkError> {
        let id = Uuid::new_v4();

        // Timestamp and status are assigned server-side
        sqlx::query(
            "INSERT INTO messages (id, name, email, message, status, created_at) \
             VALUES ($1, $2, $3, $4, 'new', now())",
        )
        .bind(id)
        .bind(&message.name)
        .bind(&message.email)
        .bind(&message.message)
        .execute(&self.pool)
        .await
        .map_err(|e| SinkError::Store(e.to_string()))?;

        tracing::info!(message_id = %id, "Contact message stored");

        Ok(MessageReceipt {
            message_id: id.to_string(),
            accepted_at: chrono::Utc::now(),
            channel: self.channel().to_string(),
        })
    }

    fn channel(&self) -> &'static str {
        "store"
    }
}
