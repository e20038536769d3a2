//! File Repository Implementation
//!
//! PostgreSQL implementation of the FileRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::{File, FileRepository, ResourceType};
use crate::shared::error::AppError;

/// Database row representation of the files table.
#[derive(Debug, sqlx::FromRow)]
struct FileRow {
    id: i64,
    resource_id: Option<i64>,
    resource_type: Option<String>,
    filename: String,
    content_type: Option<String>,
    created_at: DateTime<Utc>,
}

impl FileRow {
    /// Convert database row to domain File entity.
    fn into_file(self) -> File {
        let resource_type = self.resource_type.as_deref().and_then(|tag| {
            tag.parse::<ResourceType>()
                .map_err(|e| {
                    tracing::warn!(file_id = self.id, error = %e, "Stored file has an unknown resource type");
                })
                .ok()
        });

        File {
            id: self.id,
            resource_id: self.resource_id,
            resource_type,
            filename: self.filename,
            content_type: self.content_type,
            created_at: self.created_at,
        }
    }
}

/// PostgreSQL file metadata repository.
#[derive(Clone)]
pub struct PgFileRepository {
    pool: PgPool,
}

impl PgFileRepository {
    /// Create a new PgFileRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FileRepository for PgFileRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<File>, AppError> {
        let row = sqlx::query_as::<_, FileRow>(
            r#"
            SELECT id, resource_id, resource_type, filename, content_type, created_at
            FROM files
            WHERE id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_file()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(resource_type: Option<&str>) -> FileRow {
        FileRow {
            id: 1,
            resource_id: Some(2),
            resource_type: resource_type.map(str::to_string),
            filename: "banner.png".into(),
            content_type: Some("image/png".into()),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_row_with_known_tag() {
        let file = row(Some("COMMUNITY_BANNER")).into_file();
        assert_eq!(file.resource_type, Some(ResourceType::CommunityBanner));
        assert_eq!(file.resource_id, Some(2));
    }

    #[test]
    fn test_row_with_unknown_tag_has_no_resource_type() {
        let file = row(Some("STICKER")).into_file();
        assert_eq!(file.resource_type, None);
    }

    #[test]
    fn test_row_without_tag() {
        assert_eq!(row(None).into_file().resource_type, None);
    }
}
