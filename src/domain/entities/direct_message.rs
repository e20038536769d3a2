//! Direct message group participant entity and repository trait.
//!
//! Maps to the `direct_message_group_members` table in the database schema.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// A user's participation in a direct message conversation.
///
/// Maps to the `direct_message_group_members` table:
/// - group_id: BIGINT NOT NULL REFERENCES direct_message_groups(id) (composite PK)
/// - user_id: BIGINT NOT NULL REFERENCES users(id) (composite PK)
/// - joined_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectMessageGroupMember {
    pub group_id: i64,
    pub user_id: i64,
    pub joined_at: DateTime<Utc>,
}

/// Repository trait for direct message group participants.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DirectMessageRepository: Send + Sync {
    /// Find the participant row for `(group_id, user_id)`.
    async fn find_group_member(
        &self,
        group_id: i64,
        user_id: i64,
    ) -> Result<Option<DirectMessageGroupMember>, AppError>;
}
