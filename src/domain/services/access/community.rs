//! Community membership gate for community avatars, banners and emoji.

use std::sync::Arc;

use async_trait::async_trait;

use super::{AccessError, AccessStrategy, REASON_NOT_COMMUNITY_FILE_MEMBER};
use crate::domain::MemberRepository;

/// Grants access to members of the owning community.
pub struct CommunityMembershipStrategy {
    members: Arc<dyn MemberRepository>,
}

impl CommunityMembershipStrategy {
    pub fn new(members: Arc<dyn MemberRepository>) -> Self {
        Self { members }
    }
}

#[async_trait]
impl AccessStrategy for CommunityMembershipStrategy {
    async fn check_access(
        &self,
        user_id: i64,
        community_id: i64,
        file_id: i64,
    ) -> Result<bool, AccessError> {
        if self.members.is_member(user_id, community_id).await? {
            return Ok(true);
        }

        tracing::debug!(user_id, community_id, file_id, "Community file denied: not a member");
        Err(AccessError::forbidden(REASON_NOT_COMMUNITY_FILE_MEMBER))
    }
}
