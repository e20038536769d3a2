//! # Domain Entities
//!
//! Read models consulted by the file access engine. None of them are
//! created or mutated here; each maps to a table owned by another service.
//!
//! - **File**: Stored file metadata and the resource it is attached to
//! - **Message**: A message posted in a channel or a direct message group
//! - **Channel**: A community channel, public or private
//! - **CommunityMember / ChannelMember**: Existence-based memberships
//! - **DirectMessageGroupMember**: Participation in a DM conversation
//! - **ReplayClip**: A recorded clip shared in a channel
//! - **Principal**: The authenticated user a request is made for
//!
//! ## Repository Traits
//!
//! Each entity has an associated repository trait defining the lookups the
//! engine needs. These traits are implemented in the infrastructure layer.

mod channel;
mod direct_message;
mod file;
mod member;
mod message;
mod principal;
mod replay_clip;

pub use channel::{Channel, ChannelRepository};
pub use direct_message::{DirectMessageGroupMember, DirectMessageRepository};
pub use file::{File, FileRepository, ResourceType, UnknownResourceType};
pub use member::{ChannelMember, ChannelMemberRepository, CommunityMember, MemberRepository};
pub use message::{Message, MessageRepository, MessageScope};
pub use principal::Principal;
pub use replay_clip::{ReplayClip, ReplayClipRepository};

#[cfg(test)]
pub use channel::MockChannelRepository;
#[cfg(test)]
pub use direct_message::MockDirectMessageRepository;
#[cfg(test)]
pub use file::MockFileRepository;
#[cfg(test)]
pub use member::{MockChannelMemberRepository, MockMemberRepository};
#[cfg(test)]
pub use message::MockMessageRepository;
#[cfg(test)]
pub use replay_clip::MockReplayClipRepository;
