//! Message entity and repository trait.
//!
//! Maps to the `messages` table in the database schema.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// Represents a message sent either in a community channel or in a
/// direct message group.
///
/// Maps to the `messages` table:
/// - id: BIGINT PRIMARY KEY (Snowflake ID)
/// - channel_id: BIGINT NULL REFERENCES channels(id)
/// - direct_message_group_id: BIGINT NULL REFERENCES direct_message_groups(id)
/// - author_id: BIGINT NOT NULL REFERENCES users(id)
/// - created_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
///
/// Exactly one of `channel_id` / `direct_message_group_id` is set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Snowflake ID (primary key)
    pub id: i64,

    /// Channel the message was posted in
    pub channel_id: Option<i64>,

    /// Direct message group the message was posted in
    pub direct_message_group_id: Option<i64>,

    /// Author user ID
    pub author_id: i64,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// Where a message lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageScope {
    /// Posted in a community channel
    Channel(i64),
    /// Posted in a direct message group
    DirectMessage(i64),
    /// Neither container is set (data integrity violation)
    Orphaned,
}

impl Message {
    /// Resolve the container of this message.
    ///
    /// The channel wins when both references are present.
    pub fn scope(&self) -> MessageScope {
        match (self.channel_id, self.direct_message_group_id) {
            (Some(channel_id), _) => MessageScope::Channel(channel_id),
            (None, Some(group_id)) => MessageScope::DirectMessage(group_id),
            (None, None) => MessageScope::Orphaned,
        }
    }
}

impl Default for Message {
    fn default() -> Self {
        Self {
            id: 0,
            channel_id: None,
            direct_message_group_id: None,
            author_id: 0,
            created_at: Utc::now(),
        }
    }
}

/// Repository trait for Message lookups.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Find a message by its Snowflake ID.
    async fn find_by_id(&self, id: i64) -> Result<Option<Message>, AppError>;
}
