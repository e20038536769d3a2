//! Replay clip entity and repository trait.
//!
//! Maps to the `replay_clips` table in the database schema.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// A recorded clip shared into a community channel.
///
/// Maps to the `replay_clips` table:
/// - id: BIGINT PRIMARY KEY (Snowflake ID)
/// - channel_id: BIGINT NOT NULL REFERENCES channels(id)
/// - author_id: BIGINT NOT NULL REFERENCES users(id)
/// - created_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplayClip {
    /// Snowflake ID (primary key)
    pub id: i64,

    /// Channel the clip was shared in
    pub channel_id: i64,

    /// User who captured the clip
    pub author_id: i64,

    /// Capture timestamp
    pub created_at: DateTime<Utc>,
}

/// Repository trait for ReplayClip lookups.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReplayClipRepository: Send + Sync {
    /// Find a replay clip by its Snowflake ID.
    async fn find_by_id(&self, id: i64) -> Result<Option<ReplayClip>, AppError>;
}
