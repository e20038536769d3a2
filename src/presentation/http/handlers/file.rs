//! File Handlers
//!
//! Streaming file bodies is handled by the storage service; this endpoint
//! only confirms a decision already made by the file access guard, so it can
//! back an `auth_request`-style check in front of that service.

use axum::{
    extract::{Extension, Path, State},
    Json,
};
use serde::Serialize;

use crate::application::services::AccessGrant;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// File access check response
#[derive(Debug, Serialize)]
pub struct FileAccessResponse {
    pub file_id: String,
    pub allowed: bool,
    /// "public" or "scoped"
    pub access: &'static str,
}

/// Report that the caller may retrieve the file
pub async fn check_file_access(
    Path(file_id): Path<String>,
    Extension(grant): Extension<AccessGrant>,
) -> Json<FileAccessResponse> {
    granted(file_id, grant)
}

/// `/files/` without an id segment, answered by the engine
pub async fn check_missing_file_id(
    State(state): State<AppState>,
) -> Result<Json<FileAccessResponse>, AppError> {
    let grant = state.file_access.decide(None, "").await?;
    Ok(granted(String::new(), grant))
}

fn granted(file_id: String, grant: AccessGrant) -> Json<FileAccessResponse> {
    let access = match grant {
        AccessGrant::Public => "public",
        AccessGrant::Scoped => "scoped",
    };

    Json(FileAccessResponse {
        file_id,
        allowed: true,
        access,
    })
}
