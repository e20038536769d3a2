//! Stored file entity and repository trait.
//!
//! Maps to the `files` table in the database schema.

use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// Kind of entity a stored file is attached to.
///
/// Database definition:
/// ```sql
/// resource_type VARCHAR(32) -- 'USER_AVATAR', 'USER_BANNER', 'COMMUNITY_AVATAR',
///                           -- 'COMMUNITY_BANNER', 'CUSTOM_EMOJI',
///                           -- 'MESSAGE_ATTACHMENT', 'REPLAY_CLIP'
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResourceType {
    /// Profile picture of a user (resource id = user id)
    UserAvatar,
    /// Profile banner of a user (resource id = user id)
    UserBanner,
    /// Icon of a community (resource id = community id)
    CommunityAvatar,
    /// Banner of a community (resource id = community id)
    CommunityBanner,
    /// Emoji uploaded to a community (resource id = community id)
    CustomEmoji,
    /// File attached to a message (resource id = message id)
    MessageAttachment,
    /// Recorded clip shared in a channel (resource id = replay clip id)
    ReplayClip,
}

impl ResourceType {
    /// Every known tag, in declaration order.
    pub const ALL: [ResourceType; 7] = [
        Self::UserAvatar,
        Self::UserBanner,
        Self::CommunityAvatar,
        Self::CommunityBanner,
        Self::CustomEmoji,
        Self::MessageAttachment,
        Self::ReplayClip,
    ];

    /// Convert to database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UserAvatar => "USER_AVATAR",
            Self::UserBanner => "USER_BANNER",
            Self::CommunityAvatar => "COMMUNITY_AVATAR",
            Self::CommunityBanner => "COMMUNITY_BANNER",
            Self::CustomEmoji => "CUSTOM_EMOJI",
            Self::MessageAttachment => "MESSAGE_ATTACHMENT",
            Self::ReplayClip => "REPLAY_CLIP",
        }
    }
}

/// Returned when a stored tag does not name a known resource type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown resource type: {0}")]
pub struct UnknownResourceType(pub String);

impl FromStr for ResourceType {
    type Err = UnknownResourceType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "USER_AVATAR" => Ok(Self::UserAvatar),
            "USER_BANNER" => Ok(Self::UserBanner),
            "COMMUNITY_AVATAR" => Ok(Self::CommunityAvatar),
            "COMMUNITY_BANNER" => Ok(Self::CommunityBanner),
            "CUSTOM_EMOJI" => Ok(Self::CustomEmoji),
            "MESSAGE_ATTACHMENT" => Ok(Self::MessageAttachment),
            "REPLAY_CLIP" => Ok(Self::ReplayClip),
            _ => Err(UnknownResourceType(s.to_string())),
        }
    }
}

impl std::fmt::Display for ResourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Metadata of a stored file.
///
/// Maps to the `files` table:
/// - id: BIGINT PRIMARY KEY (Snowflake ID)
/// - resource_id: BIGINT NULL -- NULL means the file is public
/// - resource_type: VARCHAR(32) NULL
/// - filename: VARCHAR(255) NOT NULL
/// - content_type: VARCHAR(100) NULL
/// - created_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct File {
    /// Snowflake ID (primary key)
    pub id: i64,

    /// Owning resource; `None` marks a public asset
    pub resource_id: Option<i64>,

    /// Kind of the owning resource.
    ///
    /// `None` when the stored tag is missing or not recognised by this build.
    pub resource_type: Option<ResourceType>,

    /// Original filename
    pub filename: String,

    /// MIME type (e.g., "image/png")
    pub content_type: Option<String>,

    /// Upload timestamp
    pub created_at: DateTime<Utc>,
}

impl Default for File {
    fn default() -> Self {
        Self {
            id: 0,
            resource_id: None,
            resource_type: None,
            filename: String::new(),
            content_type: None,
            created_at: Utc::now(),
        }
    }
}

/// Repository trait for File metadata lookups.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FileRepository: Send + Sync {
    /// Find a file by its Snowflake ID.
    async fn find_by_id(&self, id: i64) -> Result<Option<File>, AppError>;
}
