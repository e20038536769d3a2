//! Access to recorded replay clips.

use std::sync::Arc;

use async_trait::async_trait;

use super::{AccessError, AccessStrategy, ChannelGate, REASON_REPLAY_CLIP_NOT_FOUND};
use crate::domain::ReplayClipRepository;

/// Grants access to anyone who can see the channel the clip was shared in.
pub struct ReplayClipAccessStrategy {
    clips: Arc<dyn ReplayClipRepository>,
    channel_gate: ChannelGate,
}

impl ReplayClipAccessStrategy {
    pub fn new(clips: Arc<dyn ReplayClipRepository>, channel_gate: ChannelGate) -> Self {
        Self {
            clips,
            channel_gate,
        }
    }
}

#[async_trait]
impl AccessStrategy for ReplayClipAccessStrategy {
    async fn check_access(
        &self,
        user_id: i64,
        clip_id: i64,
        _file_id: i64,
    ) -> Result<bool, AccessError> {
        let clip = self
            .clips
            .find_by_id(clip_id)
            .await?
            .ok_or_else(|| AccessError::not_found(REASON_REPLAY_CLIP_NOT_FOUND))?;

        self.channel_gate.check(user_id, clip.channel_id).await
    }
}
