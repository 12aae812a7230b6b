//! Search audit trail.
//!
//! Model-ranked searches are recorded to `search_records` for later review.
//! Recording is best effort: the pipeline logs and swallows sink errors, so
//! an audit outage never degrades a match response.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::search::NewSearchRecord;

/// Destination for search audit records.
#[async_trait]
pub trait AuditSink: Send + Sync {
    async fn record(&self, record: NewSearchRecord) -> anyhow::Result<()>;
}

/// Postgres-backed sink writing to `search_records`.
pub struct PgAuditSink {
    pool: PgPool,
}

impl PgAuditSink {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuditSink for PgAuditSink {
    async fn record(&self, record: NewSearchRecord) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO search_records (id, user_id, profile, interests, result_count)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(record.user_id)
        .bind(&record.profile)
        .bind(&record.interests)
        .bind(record.result_count)
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}
