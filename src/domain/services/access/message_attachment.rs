//! Access to files attached to messages.
//!
//! Resolution path: message -> channel -> (community | channel) membership,
//! or message -> direct message group participant.

use std::sync::Arc;

use async_trait::async_trait;

use super::{
    AccessError, AccessStrategy, ChannelGate, REASON_MESSAGE_NOT_FOUND,
    REASON_NOT_CONVERSATION_MEMBER,
};
use crate::domain::{DirectMessageRepository, MessageRepository, MessageScope};

/// Grants access to anyone who can read the message the file is attached to.
pub struct MessageAttachmentStrategy {
    messages: Arc<dyn MessageRepository>,
    direct_messages: Arc<dyn DirectMessageRepository>,
    channel_gate: ChannelGate,
}

impl MessageAttachmentStrategy {
    pub fn new(
        messages: Arc<dyn MessageRepository>,
        direct_messages: Arc<dyn DirectMessageRepository>,
        channel_gate: ChannelGate,
    ) -> Self {
        Self {
            messages,
            direct_messages,
            channel_gate,
        }
    }

    async fn check_direct_message(&self, user_id: i64, group_id: i64) -> Result<bool, AccessError> {
        match self.direct_messages.find_group_member(group_id, user_id).await? {
            Some(_) => Ok(true),
            None => {
                tracing::debug!(user_id, group_id, "Direct message attachment denied");
                Err(AccessError::forbidden(REASON_NOT_CONVERSATION_MEMBER))
            }
        }
    }
}

#[async_trait]
impl AccessStrategy for MessageAttachmentStrategy {
    async fn check_access(
        &self,
        user_id: i64,
        message_id: i64,
        file_id: i64,
    ) -> Result<bool, AccessError> {
        let message = self
            .messages
            .find_by_id(message_id)
            .await?
            .ok_or_else(|| AccessError::not_found(REASON_MESSAGE_NOT_FOUND))?;

        match message.scope() {
            MessageScope::Channel(channel_id) => self.channel_gate.check(user_id, channel_id).await,
            MessageScope::DirectMessage(group_id) => {
                self.check_direct_message(user_id, group_id).await
            }
            MessageScope::Orphaned => Err(AccessError::Internal(format!(
                "message {} (file {}) has neither a channel nor a direct message group",
                message_id, file_id
            ))),
        }
    }
}
