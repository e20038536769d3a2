//! Member Repository Implementation
//!
//! PostgreSQL implementations of the community and channel membership
//! oracles. Membership is existence based, so both are `EXISTS` probes on
//! the composite primary key.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::{ChannelMemberRepository, MemberRepository};
use crate::shared::error::AppError;

/// PostgreSQL community membership repository.
#[derive(Clone)]
pub struct PgMemberRepository {
    pool: PgPool,
}

impl PgMemberRepository {
    /// Create a new PgMemberRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MemberRepository for PgMemberRepository {
    async fn is_member(&self, user_id: i64, community_id: i64) -> Result<bool, AppError> {
        let exists: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM community_members
                WHERE community_id = $1 AND user_id = $2
            )
            "#,
        )
        .bind(community_id)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }
}

/// PostgreSQL private channel membership repository.
#[derive(Clone)]
pub struct PgChannelMemberRepository {
    pool: PgPool,
}

impl PgChannelMemberRepository {
    /// Create a new PgChannelMemberRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ChannelMemberRepository for PgChannelMemberRepository {
    async fn is_channel_member(&self, user_id: i64, channel_id: i64) -> Result<bool, AppError> {
        let exists: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM channel_members
                WHERE channel_id = $1 AND user_id = $2
            )
            "#,
        )
        .bind(channel_id)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }
}
