//! Channel entity and repository trait.
//!
//! Maps to the `channels` table in the database schema.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// Represents a channel inside a community.
///
/// Maps to the `channels` table:
/// - id: BIGINT PRIMARY KEY (Snowflake ID)
/// - community_id: BIGINT NOT NULL REFERENCES communities(id)
/// - name: VARCHAR(100) NOT NULL
/// - is_private: BOOLEAN NOT NULL DEFAULT FALSE
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Channel {
    /// Snowflake ID (primary key)
    pub id: i64,

    /// Community the channel belongs to
    pub community_id: i64,

    /// Channel name (1-100 characters)
    pub name: String,

    /// Private channels are gated by explicit channel membership instead of
    /// community membership
    pub is_private: bool,
}

/// Repository trait for Channel lookups.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChannelRepository: Send + Sync {
    /// Find a channel by its Snowflake ID.
    async fn find_by_id(&self, id: i64) -> Result<Option<Channel>, AppError>;
}
