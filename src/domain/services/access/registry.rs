//! Resource type to strategy mapping.

use std::collections::HashMap;
use std::sync::Arc;

use super::{
    AccessStrategy, ChannelGate, CommunityMembershipStrategy, MessageAttachmentStrategy,
    PublicAccessStrategy, ReplayClipAccessStrategy,
};
use crate::domain::{
    ChannelMemberRepository, ChannelRepository, DirectMessageRepository, MemberRepository,
    MessageRepository, ReplayClipRepository, ResourceType,
};

/// Immutable lookup table from [`ResourceType`] to the strategy deciding
/// access for it.
///
/// Built once during application wiring and shared behind an `Arc`. A tag
/// without an entry has no strategy and is denied by the engine.
#[derive(Clone, Default)]
pub struct StrategyRegistry {
    strategies: HashMap<ResourceType, Arc<dyn AccessStrategy>>,
}

/// Collects strategies before freezing them into a [`StrategyRegistry`].
#[derive(Default)]
pub struct StrategyRegistryBuilder {
    strategies: HashMap<ResourceType, Arc<dyn AccessStrategy>>,
}

impl StrategyRegistryBuilder {
    /// Map `resource_type` to `strategy`, replacing any previous entry.
    pub fn register(mut self, resource_type: ResourceType, strategy: Arc<dyn AccessStrategy>) -> Self {
        if self.strategies.insert(resource_type, strategy).is_some() {
            tracing::warn!(%resource_type, "Access strategy registered twice, keeping the last one");
        }
        self
    }

    /// Map several tags to one shared strategy instance.
    pub fn register_all(
        mut self,
        resource_types: &[ResourceType],
        strategy: Arc<dyn AccessStrategy>,
    ) -> Self {
        for resource_type in resource_types {
            self = self.register(*resource_type, Arc::clone(&strategy));
        }
        self
    }

    pub fn build(self) -> StrategyRegistry {
        StrategyRegistry {
            strategies: self.strategies,
        }
    }
}

/// Data sources the standard strategies read from.
#[derive(Clone)]
pub struct AccessRepositories {
    pub messages: Arc<dyn MessageRepository>,
    pub channels: Arc<dyn ChannelRepository>,
    pub members: Arc<dyn MemberRepository>,
    pub channel_members: Arc<dyn ChannelMemberRepository>,
    pub direct_messages: Arc<dyn DirectMessageRepository>,
    pub replay_clips: Arc<dyn ReplayClipRepository>,
}

impl StrategyRegistry {
    pub fn builder() -> StrategyRegistryBuilder {
        StrategyRegistryBuilder::default()
    }

    /// The production mapping covering every [`ResourceType`].
    pub fn standard(repos: AccessRepositories) -> Self {
        let channel_gate = ChannelGate::new(
            Arc::clone(&repos.channels),
            Arc::clone(&repos.members),
            Arc::clone(&repos.channel_members),
        );

        let public: Arc<dyn AccessStrategy> = Arc::new(PublicAccessStrategy);
        let community: Arc<dyn AccessStrategy> =
            Arc::new(CommunityMembershipStrategy::new(Arc::clone(&repos.members)));
        let message_attachment: Arc<dyn AccessStrategy> = Arc::new(MessageAttachmentStrategy::new(
            repos.messages,
            repos.direct_messages,
            channel_gate.clone(),
        ));
        let replay_clip: Arc<dyn AccessStrategy> =
            Arc::new(ReplayClipAccessStrategy::new(repos.replay_clips, channel_gate));

        Self::builder()
            .register_all(&[ResourceType::UserAvatar, ResourceType::UserBanner], public)
            .register_all(
                &[
                    ResourceType::CommunityAvatar,
                    ResourceType::CommunityBanner,
                    ResourceType::CustomEmoji,
                ],
                community,
            )
            .register(ResourceType::MessageAttachment, message_attachment)
            .register(ResourceType::ReplayClip, replay_clip)
            .build()
    }

    /// Strategy for `resource_type`, if one is registered.
    pub fn get(&self, resource_type: ResourceType) -> Option<&dyn AccessStrategy> {
        self.strategies.get(&resource_type).map(|s| s.as_ref())
    }

    pub fn contains(&self, resource_type: ResourceType) -> bool {
        self.strategies.contains_key(&resource_type)
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }
}

impl std::fmt::Debug for StrategyRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut registered: Vec<_> = self.strategies.keys().map(|t| t.as_str()).collect();
        registered.sort_unstable();
        f.debug_struct("StrategyRegistry")
            .field("registered", &registered)
            .finish()
    }
}
