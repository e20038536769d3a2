//! # File Access Strategies
//!
//! One strategy per category of resource a file can be attached to. Each
//! strategy answers a single question: may `user_id` read a file owned by
//! `resource_id`? A strategy either grants access (`Ok(true)`) or raises a
//! classified [`AccessError`]; it never returns `Ok(false)`.
//!
//! | Resource type                                        | Strategy                          |
//! |------------------------------------------------------|-----------------------------------|
//! | `USER_AVATAR`, `USER_BANNER`                         | [`PublicAccessStrategy`]          |
//! | `COMMUNITY_AVATAR`, `COMMUNITY_BANNER`, `CUSTOM_EMOJI` | [`CommunityMembershipStrategy`] |
//! | `MESSAGE_ATTACHMENT`                                 | [`MessageAttachmentStrategy`]     |
//! | `REPLAY_CLIP`                                        | [`ReplayClipAccessStrategy`]      |
//!
//! The mapping lives in [`StrategyRegistry`], which is built once at startup
//! and shared read-only between requests.

mod channel_gate;
mod community;
mod message_attachment;
mod public;
mod registry;
mod replay_clip;

use async_trait::async_trait;

use crate::shared::error::AppError;

pub use channel_gate::ChannelGate;
pub use community::CommunityMembershipStrategy;
pub use message_attachment::MessageAttachmentStrategy;
pub use public::PublicAccessStrategy;
pub use registry::{AccessRepositories, StrategyRegistry, StrategyRegistryBuilder};
pub use replay_clip::ReplayClipAccessStrategy;

pub const REASON_FILE_ID_MISSING: &str = "file id not provided";
pub const REASON_FILE_NOT_FOUND: &str = "file not found";
pub const REASON_AUTHENTICATION_REQUIRED: &str = "authentication required";
pub const REASON_ACCESS_DENIED: &str = "access denied";
pub const REASON_NOT_COMMUNITY_FILE_MEMBER: &str =
    "you must be a member of this community to access this file";
pub const REASON_NOT_COMMUNITY_MEMBER: &str = "you must be a member of this community";
pub const REASON_NOT_CHANNEL_MEMBER: &str = "you must be a member of this private channel";
pub const REASON_NOT_CONVERSATION_MEMBER: &str = "you must be a member of this conversation";
pub const REASON_MESSAGE_NOT_FOUND: &str = "message not found";
pub const REASON_CHANNEL_NOT_FOUND: &str = "channel not found";
pub const REASON_REPLAY_CLIP_NOT_FOUND: &str = "replay clip not found";

/// Outcome of a denied access check.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccessError {
    /// The principal is known but policy denies access.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// The file or an entity on its resolution path does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Anything else. Never shown to callers.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AccessError {
    pub fn forbidden(reason: &str) -> Self {
        Self::Forbidden(reason.to_string())
    }

    pub fn not_found(reason: &str) -> Self {
        Self::NotFound(reason.to_string())
    }

    /// `true` for the two kinds that may reach the caller unchanged.
    pub fn is_classified(&self) -> bool {
        !matches!(self, Self::Internal(_))
    }
}

impl From<AppError> for AccessError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::Forbidden(reason) => Self::Forbidden(reason),
            AppError::NotFound(reason) => Self::NotFound(reason),
            other => Self::Internal(other.to_string()),
        }
    }
}

/// Access decision for one category of resource.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccessStrategy: Send + Sync {
    /// Decide whether `user_id` may read `file_id`, which is attached to
    /// `resource_id`.
    async fn check_access(
        &self,
        user_id: i64,
        resource_id: i64,
        file_id: i64,
    ) -> Result<bool, AccessError>;
}
