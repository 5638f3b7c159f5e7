//! Response DTOs for the blog frontend API
//!
//! Defines the structure of outgoing HTTP response bodies that are not
//! view models.

use serde::Serialize;

use crate::cache::CacheStats;

/// One entry of GET /static-params
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StaticParam {
    pub slug: String,
}

/// Response body for POST /revalidate
#[derive(Debug, Clone, Serialize)]
pub struct RevalidateResponse {
    pub message: String,
    /// Number of cache entries dropped
    pub invalidated: usize,
}

impl RevalidateResponse {
    pub fn for_key(key: &str, removed: bool) -> Self {
        Self {
            message: format!("Key '{}' revalidated", key),
            invalidated: usize::from(removed),
        }
    }

    pub fn for_all(count: usize) -> Self {
        Self {
            message: "All content revalidated".to_string(),
            invalidated: count,
        }
    }
}

/// Response body for GET /stats
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub hits: u64,
    pub misses: u64,
    pub stores: u64,
    pub invalidations: u64,
    pub expirations: u64,
    pub total_entries: usize,
    /// hits / (hits + misses)
    pub hit_rate: f64,
    /// Validity window applied to new entries, None = until invalidated
    pub revalidate_secs: Option<u64>,
    /// Currently cached keys
    pub keys: Vec<String>,
}

impl StatsResponse {
    pub fn new(stats: &CacheStats, revalidate_secs: Option<u64>, keys: Vec<String>) -> Self {
        Self {
            hits: stats.hits,
            misses: stats.misses,
            stores: stats.stores,
            invalidations: stats.invalidations,
            expirations: stats.expirations,
            total_entries: stats.total_entries,
            hit_rate: stats.hit_rate(),
            revalidate_secs,
            keys,
        }
    }
}

/// Response body for GET /health
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
