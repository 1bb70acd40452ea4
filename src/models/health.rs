//! Health-check payload.

use serde::{Deserialize, Serialize};

/// Response body of the `/health` endpoint.
///
/// Unlike the search endpoints this payload has no `success` envelope; the
/// server reports its state directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    /// Server-reported status string (e.g. "ok").
    pub status: String,
    /// Whether the backing database is reachable.
    pub database_available: bool,
}
