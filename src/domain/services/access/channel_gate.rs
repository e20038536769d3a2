//! Channel visibility check shared by message attachments and replay clips.

use std::sync::Arc;

use super::{
    AccessError, REASON_CHANNEL_NOT_FOUND, REASON_NOT_CHANNEL_MEMBER, REASON_NOT_COMMUNITY_MEMBER,
};
use crate::domain::{ChannelMemberRepository, ChannelRepository, MemberRepository};

/// Decides whether a user can see the content of a channel.
///
/// Public channels inherit community membership. Private channels require
/// an explicit channel membership and ignore community membership entirely.
#[derive(Clone)]
pub struct ChannelGate {
    channels: Arc<dyn ChannelRepository>,
    members: Arc<dyn MemberRepository>,
    channel_members: Arc<dyn ChannelMemberRepository>,
}

impl ChannelGate {
    pub fn new(
        channels: Arc<dyn ChannelRepository>,
        members: Arc<dyn MemberRepository>,
        channel_members: Arc<dyn ChannelMemberRepository>,
    ) -> Self {
        Self {
            channels,
            members,
            channel_members,
        }
    }

    pub async fn check(&self, user_id: i64, channel_id: i64) -> Result<bool, AccessError> {
        let channel = self
            .channels
            .find_by_id(channel_id)
            .await?
            .ok_or_else(|| AccessError::not_found(REASON_CHANNEL_NOT_FOUND))?;

        if channel.is_private {
            if self.channel_members.is_channel_member(user_id, channel.id).await? {
                return Ok(true);
            }
            tracing::debug!(user_id, channel_id, "Private channel content denied");
            return Err(AccessError::forbidden(REASON_NOT_CHANNEL_MEMBER));
        }

        if self.members.is_member(user_id, channel.community_id).await? {
            return Ok(true);
        }
        tracing::debug!(
            user_id,
            channel_id,
            community_id = channel.community_id,
            "Channel content denied: not a community member"
        );
        Err(AccessError::forbidden(REASON_NOT_COMMUNITY_MEMBER))
    }
}
