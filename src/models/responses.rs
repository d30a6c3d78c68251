//! Response DTOs for the cache server API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::cache::{CacheStats, CacheValue};

/// Response body for GET /cache/:id
#[derive(Debug, Clone, Serialize)]
pub struct FetchResponse {
    /// The requested id
    pub id: String,
    /// The stored value
    pub value: CacheValue,
}

impl FetchResponse {
    pub fn new(id: impl Into<String>, value: CacheValue) -> Self {
        Self {
            id: id.into(),
            value,
        }
    }
}

/// Response body for PUT /cache/:id
#[derive(Debug, Clone, Serialize)]
pub struct SaveResponse {
    /// Success message
    pub message: String,
    /// The id that was saved
    pub id: String,
    /// Whether the backend accepted the write
    pub saved: bool,
}

impl SaveResponse {
    pub fn new(id: impl Into<String>, saved: bool) -> Self {
        let id = id.into();
        Self {
            message: format!("Id '{}' saved", id),
            id,
            saved,
        }
    }
}

/// Response body for GET /cache/:id/exists
#[derive(Debug, Clone, Serialize)]
pub struct ExistsResponse {
    pub id: String,
    pub exists: bool,
}

impl ExistsResponse {
    pub fn new(id: impl Into<String>, exists: bool) -> Self {
        Self {
            id: id.into(),
            exists,
        }
    }
}

/// Response body for DELETE /cache/:id
#[derive(Debug, Clone, Serialize)]
pub struct DeleteResponse {
    pub id: String,
    pub deleted: bool,
}

impl DeleteResponse {
    pub fn new(id: impl Into<String>, deleted: bool) -> Self {
        Self {
            id: id.into(),
            deleted,
        }
    }
}

/// Response body for DELETE /cache
#[derive(Debug, Clone, Serialize)]
pub struct FlushResponse {
    pub flushed: bool,
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Current number of entries in cache
    pub total_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl From<CacheStats> for StatsResponse {
    fn from(stats: CacheStats) -> Self {
        Self {
            hits: stats.hits,
            misses: stats.misses,
            total_entries: stats.total_entries,
            hit_rate: stats.hit_rate(),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
