//! Direct Message Repository Implementation
//!
//! PostgreSQL implementation of the DirectMessageRepository trait.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::{DirectMessageGroupMember, DirectMessageRepository};
use crate::shared::error::AppError;

/// PostgreSQL direct message group participant repository.
#[derive(Clone)]
pub struct PgDirectMessageRepository {
    pool: PgPool,
}

impl PgDirectMessageRepository {
    /// Create a new PgDirectMessageRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DirectMessageRepository for PgDirectMessageRepository {
    async fn find_group_member(
        &self,
        group_id: i64,
        user_id: i64,
    ) -> Result<Option<DirectMessageGroupMember>, AppError> {
        let row = sqlx::query_as::<_, (i64, i64, chrono::DateTime<chrono::Utc>)>(
            r#"
            SELECT group_id, user_id, joined_at
            FROM direct_message_group_members
            WHERE group_id = $1 AND user_id = $2
            "#,
        )
        .bind(group_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|(group_id, user_id, joined_at)| DirectMessageGroupMember {
            group_id,
            user_id,
            joined_at,
        }))
    }
}
