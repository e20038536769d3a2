//! Middleware
//!
//! Tower middleware for request processing.

pub mod auth;
pub mod cors;
pub mod file_access;
pub mod logging;

pub use auth::{decode_principal, optional_auth_middleware, Claims};
pub use file_access::file_access_guard;
pub use logging::track_metrics;
