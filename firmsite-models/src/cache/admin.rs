use serde::{Deserialize, Serialize};

/// Cached outcome of a successful allow-list lookup, keyed by identity.
/// Denials are never cached so a freshly added admin is admitted on the
/// next request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminGateCache {
    pub admin_id: i32,
    pub email: String,
}
