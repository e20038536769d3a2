//! Route Configuration
//!
//! Configures all HTTP routes for the API.

use axum::{middleware, response::IntoResponse, routing::get, Router};

use super::handlers;
use crate::infrastructure::metrics;
use crate::presentation::middleware::{file_access_guard, optional_auth_middleware, track_metrics};
use crate::startup::AppState;

/// Create the main API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", api_routes(state.clone()))
        // Health check endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/health/live", get(handlers::health::liveness))
        .route("/health/ready", get(handlers::health::readiness))
        // Prometheus metrics endpoint
        .route("/metrics", get(metrics_handler))
        .route_layer(middleware::from_fn(track_metrics))
        .with_state(state)
}

/// Prometheus metrics endpoint handler
async fn metrics_handler() -> impl IntoResponse {
    let metrics = metrics::gather_metrics();
    (
        [(
            axum::http::header::CONTENT_TYPE,
            "text/plain; version=0.0.4; charset=utf-8",
        )],
        metrics,
    )
}

/// API v1 routes
fn api_routes(state: AppState) -> Router<AppState> {
    file_routes(state)
}

/// File routes (anonymous callers allowed, every request goes through the engine)
fn file_routes(state: AppState) -> Router<AppState> {
    let guarded = Router::new()
        // GET also answers HEAD
        .route("/files/{file_id}", get(handlers::file::check_file_access))
        // Layers run bottom-up: auth resolves the principal before the guard
        .route_layer(middleware::from_fn_with_state(state.clone(), file_access_guard))
        .route_layer(middleware::from_fn_with_state(state, optional_auth_middleware));

    Router::new()
        .route("/files/", get(handlers::file::check_missing_file_id))
        .merge(guarded)
}
