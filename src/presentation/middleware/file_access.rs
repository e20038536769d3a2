//! File Access Guard
//!
//! Runs the file access engine before any `/files/{file_id}` handler and
//! short-circuits denied requests with 403 or 404.

use axum::{
    extract::{rejection::PathRejection, Path, Request, State},
    middleware::Next,
    response::Response,
};

use crate::domain::Principal;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Guard middleware for file routes.
///
/// Expects [`optional_auth_middleware`](super::auth::optional_auth_middleware)
/// to have run first. On success the [`AccessGrant`](crate::application::services::AccessGrant)
/// is stored in the request extensions for the downstream handler.
pub async fn file_access_guard(
    State(state): State<AppState>,
    file_id: Result<Path<String>, PathRejection>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let file_id = match file_id {
        Ok(Path(file_id)) => file_id,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Undecodable file id in path");
            return Err(state.file_access.reject_undecodable_id().into());
        }
    };

    let principal = request.extensions().get::<Principal>().copied();

    let grant = state
        .file_access
        .decide(principal.as_ref(), &file_id)
        .await?;

    request.extensions_mut().insert(grant);
    Ok(next.run(request).await)
}
