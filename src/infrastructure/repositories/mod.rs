//! Repository Implementations
//!
//! PostgreSQL implementations of domain repository traits.
//!
//! ## Available Repositories
//!
//! - **PgFileRepository** - Stored file metadata
//! - **PgMessageRepository** - Message lookups
//! - **PgChannelRepository** - Channel lookups
//! - **PgMemberRepository** - Community membership
//! - **PgChannelMemberRepository** - Private channel membership
//! - **PgDirectMessageRepository** - DM group participants
//! - **PgReplayClipRepository** - Replay clip lookups
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use sqlx::PgPool;
//! use crate::infrastructure::repositories::PgRepositories;
//!
//! fn wire(pool: PgPool) {
//!     let repos = PgRepositories::new(pool);
//!     let registry = StrategyRegistry::standard(repos.access_repositories());
//! }
//! ```

pub mod channel_repository;
pub mod direct_message_repository;
pub mod file_repository;
pub mod member_repository;
pub mod message_repository;
pub mod replay_clip_repository;

use std::sync::Arc;

use sqlx::PgPool;

use crate::domain::services::access::AccessRepositories;

pub use channel_repository::PgChannelRepository;
pub use direct_message_repository::PgDirectMessageRepository;
pub use file_repository::PgFileRepository;
pub use member_repository::{PgChannelMemberRepository, PgMemberRepository};
pub use message_repository::PgMessageRepository;
pub use replay_clip_repository::PgReplayClipRepository;

/// Every PostgreSQL repository sharing one connection pool.
#[derive(Clone)]
pub struct PgRepositories {
    pub files: Arc<PgFileRepository>,
    pub messages: Arc<PgMessageRepository>,
    pub channels: Arc<PgChannelRepository>,
    pub members: Arc<PgMemberRepository>,
    pub channel_members: Arc<PgChannelMemberRepository>,
    pub direct_messages: Arc<PgDirectMessageRepository>,
    pub replay_clips: Arc<PgReplayClipRepository>,
}

impl PgRepositories {
    pub fn new(pool: PgPool) -> Self {
        Self {
            files: Arc::new(PgFileRepository::new(pool.clone())),
            messages: Arc::new(PgMessageRepository::new(pool.clone())),
            channels: Arc::new(PgChannelRepository::new(pool.clone())),
            members: Arc::new(PgMemberRepository::new(pool.clone())),
            channel_members: Arc::new(PgChannelMemberRepository::new(pool.clone())),
            direct_messages: Arc::new(PgDirectMessageRepository::new(pool.clone())),
            replay_clips: Arc::new(PgReplayClipRepository::new(pool)),
        }
    }

    /// The data sources the access strategies read from.
    pub fn access_repositories(&self) -> AccessRepositories {
        AccessRepositories {
            messages: self.messages.clone(),
            channels: self.channels.clone(),
            members: self.members.clone(),
            channel_members: self.channel_members.clone(),
            direct_messages: self.direct_messages.clone(),
            replay_clips: self.replay_clips.clone(),
        }
    }
}
