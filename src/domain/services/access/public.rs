//! Access for resources any signed-in user may view.

use async_trait::async_trait;

use super::{AccessError, AccessStrategy};

/// Grants access unconditionally.
///
/// Anonymous callers never get here: the engine rejects them before any
/// strategy runs for a scoped file.
#[derive(Debug, Clone, Copy, Default)]
pub struct PublicAccessStrategy;

#[async_trait]
impl AccessStrategy for PublicAccessStrategy {
    async fn check_access(
        &self,
        _user_id: i64,
        _resource_id: i64,
        _file_id: i64,
    ) -> Result<bool, AccessError> {
        Ok(true)
    }
}
