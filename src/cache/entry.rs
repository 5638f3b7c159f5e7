//! Cache Entry Module
//!
//! A cached query result together with its validity window.

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::content::ContentPayload;

// == Cache Entry ==
/// Represents a single cached query result.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored payload, shared with every caller that reads it
    pub payload: Arc<ContentPayload>,
    /// Creation timestamp (Unix milliseconds)
    pub created_at: u64,
    /// Expiration timestamp (Unix milliseconds), None = valid until invalidated
    pub expires_at: Option<u64>,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry with an optional validity window.
    ///
    /// # Arguments
    /// * `payload` - The query result to store
    /// * `ttl_seconds` - Optional validity window in seconds
    ///
    /// Windows too large to represent clamp to `u64::MAX` milliseconds.
    pub fn new(payload: Arc<ContentPayload>, ttl_seconds: Option<u64>) -> Self {
        let now = current_timestamp_ms();
        let expires_at = ttl_seconds.map(|ttl| now.saturating_add(ttl.saturating_mul(1000)));

        Self {
            payload,
            created_at: now,
            expires_at,
        }
    }

    // == Is Expired ==
    /// Checks if the validity window has elapsed.
    ///
    /// An entry is expired once the current time reaches its expiration time.
    pub fn is_expired(&self) -> bool {
        match self.expires_at {
            Some(expires) => current_timestamp_ms() >= expires,
            None => false,
        }
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;
    use std::time::Duration;

    fn payload() -> Arc<ContentPayload> {
        Arc::new(ContentPayload::PostSlugs(vec!["hello".to_string()]))
    }

    #[test]
    fn test_entry_without_window_never_expires() {
        let entry = CacheEntry::new(payload(), None);

        assert!(entry.expires_at.is_none());
        assert!(!entry.is_expired());
    }

    #[test]
    fn test_entry_with_window() {
        let entry = CacheEntry::new(payload(), Some(60));

        assert_eq!(entry.expires_at, Some(entry.created_at + 60_000));
        assert!(!entry.is_expired());
    }

    #[test]
    fn test_entry_expiration() {
        let entry = CacheEntry::new(payload(), Some(1));

        assert!(!entry.is_expired());

        sleep(Duration::from_millis(1100));

        assert!(entry.is_expired());
    }

    #[test]
    fn test_huge_window_saturates() {
        let entry = CacheEntry::new(payload(), Some(u64::MAX / 1000));
        assert_eq!(entry.expires_at, Some(u64::MAX));
        assert!(!entry.is_expired());

        let entry = CacheEntry::new(payload(), Some(u64::MAX));
        assert_eq!(entry.expires_at, Some(u64::MAX));
        assert!(!entry.is_expired());
    }

    #[test]
    fn test_expiration_boundary_condition() {
        let now = current_timestamp_ms();
        let entry = CacheEntry {
            payload: payload(),
            created_at: now,
            expires_at: Some(now),
        };

        assert!(entry.is_expired(), "Entry should be expired at boundary");
    }
}
