//! Replay Clip Repository Implementation
//!
//! PostgreSQL implementation of the ReplayClipRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::{ReplayClip, ReplayClipRepository};
use crate::shared::error::AppError;

#[derive(Debug, sqlx::FromRow)]
struct ReplayClipRow {
    id: i64,
    channel_id: i64,
    author_id: i64,
    created_at: DateTime<Utc>,
}

/// PostgreSQL replay clip repository.
#[derive(Clone)]
pub struct PgReplayClipRepository {
    pool: PgPool,
}

impl PgReplayClipRepository {
    /// Create a new PgReplayClipRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReplayClipRepository for PgReplayClipRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<ReplayClip>, AppError> {
        let row = sqlx::query_as::<_, ReplayClipRow>(
            r#"
            SELECT id, channel_id, author_id, created_at
            FROM replay_clips
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| ReplayClip {
            id: r.id,
            channel_id: r.channel_id,
            author_id: r.author_id,
            created_at: r.created_at,
        }))
    }
}
