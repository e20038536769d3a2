//! Community and channel membership entities and repository traits.
//!
//! Maps to the `community_members` and `channel_members` tables in the
//! database schema. Both relations are existence based: a row means the user
//! is a member.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// A user's membership in a community.
///
/// Maps to the `community_members` table:
/// - community_id: BIGINT NOT NULL REFERENCES communities(id) (composite PK)
/// - user_id: BIGINT NOT NULL REFERENCES users(id) (composite PK)
/// - joined_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommunityMember {
    pub community_id: i64,
    pub user_id: i64,
    pub joined_at: DateTime<Utc>,
}

/// A user's membership in a private channel.
///
/// Maps to the `channel_members` table:
/// - channel_id: BIGINT NOT NULL REFERENCES channels(id) (composite PK)
/// - user_id: BIGINT NOT NULL REFERENCES users(id) (composite PK)
/// - joined_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
///
/// Independent of community membership.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelMember {
    pub channel_id: i64,
    pub user_id: i64,
    pub joined_at: DateTime<Utc>,
}

/// Community membership oracle.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// Check if a user is a member of a community.
    async fn is_member(&self, user_id: i64, community_id: i64) -> Result<bool, AppError>;
}

/// Private channel membership oracle.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChannelMemberRepository: Send + Sync {
    /// Check if a user is a member of a (private) channel.
    async fn is_channel_member(&self, user_id: i64, channel_id: i64) -> Result<bool, AppError>;
}
