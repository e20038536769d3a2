//! File Access Service
//!
//! Decides whether a caller may retrieve a stored file.
//!
//! Public files (no owning resource) are served to everyone, anonymous
//! callers included. Scoped files require an authenticated principal and are
//! delegated to the strategy registered for the file's resource type.
//! Internal failures never reach the caller: they are logged here and
//! reported as "file not found".

use std::sync::Arc;

use crate::domain::services::access::{
    AccessError, StrategyRegistry, REASON_ACCESS_DENIED, REASON_AUTHENTICATION_REQUIRED,
    REASON_FILE_ID_MISSING, REASON_FILE_NOT_FOUND,
};
use crate::domain::{File, FileRepository, Principal};
use crate::infrastructure::metrics;

/// Why a request was allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessGrant {
    /// The file has no owning resource
    Public,
    /// The resource type's strategy allowed the principal
    Scoped,
}

/// The authorization engine for stored files.
pub struct FileAccessService {
    files: Arc<dyn FileRepository>,
    registry: Arc<StrategyRegistry>,
}

impl FileAccessService {
    pub fn new(files: Arc<dyn FileRepository>, registry: Arc<StrategyRegistry>) -> Self {
        Self { files, registry }
    }

    /// Decide whether `principal` may retrieve `file_id`.
    ///
    /// Only ever fails with [`AccessError::Forbidden`] or
    /// [`AccessError::NotFound`].
    pub async fn authorize(
        &self,
        principal: Option<&Principal>,
        file_id: &str,
    ) -> Result<bool, AccessError> {
        self.decide(principal, file_id).await.map(|_| true)
    }

    /// Like [`authorize`](Self::authorize) but reports how access was granted.
    pub async fn decide(
        &self,
        principal: Option<&Principal>,
        file_id: &str,
    ) -> Result<AccessGrant, AccessError> {
        let result = self.evaluate(principal, file_id).await;

        let outcome = match &result {
            Ok(AccessGrant::Public) => "public",
            Ok(AccessGrant::Scoped) => "allowed",
            Err(AccessError::Forbidden(_)) => "forbidden",
            Err(_) => "not_found",
        };
        metrics::record_file_access_decision(outcome);

        result
    }

    /// Decision for a request whose file id segment could not be decoded.
    ///
    /// Such a segment cannot name a stored file, so it is counted and
    /// reported like any other unknown id.
    pub fn reject_undecodable_id(&self) -> AccessError {
        metrics::record_file_access_decision("not_found");
        AccessError::not_found(REASON_FILE_NOT_FOUND)
    }

    async fn evaluate(
        &self,
        principal: Option<&Principal>,
        file_id: &str,
    ) -> Result<AccessGrant, AccessError> {
        if file_id.is_empty() {
            return Err(AccessError::not_found(REASON_FILE_ID_MISSING));
        }

        let file = self.resolve_file(file_id).await?;

        let Some(resource_id) = file.resource_id else {
            tracing::debug!(file_id = file.id, "Public file, access granted");
            return Ok(AccessGrant::Public);
        };

        let Some(principal) = principal else {
            tracing::debug!(file_id = file.id, resource_id, "Anonymous request for scoped file");
            return Err(AccessError::forbidden(REASON_AUTHENTICATION_REQUIRED));
        };

        let strategy = file
            .resource_type
            .and_then(|resource_type| self.registry.get(resource_type));
        let Some(strategy) = strategy else {
            tracing::warn!(
                file_id = file.id,
                resource_type = ?file.resource_type,
                "No access strategy registered for resource type"
            );
            return Err(AccessError::forbidden(REASON_ACCESS_DENIED));
        };

        match strategy
            .check_access(principal.user_id, resource_id, file.id)
            .await
        {
            Ok(true) => Ok(AccessGrant::Scoped),
            Ok(false) => {
                tracing::warn!(
                    file_id = file.id,
                    user_id = principal.user_id,
                    resource_type = ?file.resource_type,
                    "Access strategy returned a bare denial"
                );
                Err(AccessError::forbidden(REASON_ACCESS_DENIED))
            }
            Err(err) if err.is_classified() => {
                tracing::debug!(
                    file_id = file.id,
                    user_id = principal.user_id,
                    resource_id,
                    resource_type = ?file.resource_type,
                    error = %err,
                    "File access denied"
                );
                Err(err)
            }
            Err(err) => {
                tracing::error!(
                    file_id = file.id,
                    user_id = principal.user_id,
                    resource_id,
                    resource_type = ?file.resource_type,
                    error = %err,
                    "File access check failed"
                );
                Err(AccessError::not_found(REASON_FILE_NOT_FOUND))
            }
        }
    }

    async fn resolve_file(&self, file_id: &str) -> Result<File, AccessError> {
        let Ok(id) = file_id.parse::<i64>() else {
            tracing::debug!(file_id, "Malformed file id");
            return Err(AccessError::not_found(REASON_FILE_NOT_FOUND));
        };

        match self.files.find_by_id(id).await {
            Ok(Some(file)) => Ok(file),
            Ok(None) => Err(AccessError::not_found(REASON_FILE_NOT_FOUND)),
            Err(err) => match AccessError::from(err) {
                classified if classified.is_classified() => Err(classified),
                internal => {
                    tracing::error!(file_id = id, error = %internal, "File lookup failed");
                    Err(AccessError::not_found(REASON_FILE_NOT_FOUND))
                }
            },
        }
    }
}
