//! Authenticated caller identity.

use serde::{Deserialize, Serialize};

/// The user a request is made on behalf of.
///
/// Produced by the authentication middleware from a validated JWT and
/// carried in request extensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    pub user_id: i64,
}

impl Principal {
    pub fn new(user_id: i64) -> Self {
        Self { user_id }
    }
}
