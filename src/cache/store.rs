//! Content Cache Module
//!
//! Process-scoped map from cache key to the last successful query result.

use std::collections::HashMap;
use std::sync::Arc;

use crate::cache::{CacheEntry, CacheKey, CacheStats};
use crate::content::ContentPayload;

// == Content Cache ==
/// Key-scoped cache of content query results.
///
/// Entries are only ever replaced wholesale. There is no capacity-based
/// eviction; entries leave through expiry or invalidation.
#[derive(Debug, Default)]
pub struct ContentCache {
    /// Cached payloads by key
    entries: HashMap<CacheKey, CacheEntry>,
    /// Usage statistics
    stats: CacheStats,
    /// Validity window in seconds, None = until invalidated
    revalidate_secs: Option<u64>,
}

impl ContentCache {
    // == Constructor ==
    /// Creates an empty cache.
    ///
    /// # Arguments
    /// * `revalidate_secs` - Validity window for new entries, None keeps them
    ///   until explicit invalidation or process restart
    pub fn new(revalidate_secs: Option<u64>) -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
            revalidate_secs,
        }
    }

    // == Get ==
    /// Returns the cached payload for `key` if present and still valid.
    ///
    /// An expired entry is removed and counted as a miss.
    pub fn get(&mut self, key: &CacheKey) -> Option<Arc<ContentPayload>> {
        match self.entries.get(key) {
            Some(entry) if !entry.is_expired() => {
                let payload = Arc::clone(&entry.payload);
                self.stats.record_hit();
                Some(payload)
            }
            Some(_) => {
                self.entries.remove(key);
                self.stats.record_expirations(1);
                self.stats.record_miss();
                self.stats.set_total_entries(self.entries.len());
                None
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Set ==
    /// Stores a successful query result, replacing any previous entry.
    pub fn set(&mut self, key: CacheKey, payload: Arc<ContentPayload>) {
        let entry = CacheEntry::new(payload, self.revalidate_secs);
        self.entries.insert(key, entry);
        self.stats.record_store();
        self.stats.set_total_entries(self.entries.len());
    }

    // == Invalidate ==
    /// Removes the entry for `key`. Returns true if one was present.
    pub fn invalidate(&mut self, key: &CacheKey) -> bool {
        let removed = self.entries.remove(key).is_some();
        if removed {
            self.stats.record_invalidations(1);
            self.stats.set_total_entries(self.entries.len());
        }
        removed
    }

    /// Removes every entry. Returns the number removed.
    pub fn invalidate_all(&mut self) -> usize {
        let count = self.entries.len();
        self.entries.clear();
        self.stats.record_invalidations(count);
        self.stats.set_total_entries(0);
        count
    }

    // == Cleanup Expired ==
    /// Removes all entries whose validity window has elapsed.
    ///
    /// Returns the number of entries removed.
    pub fn cleanup_expired(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired());
        let count = before - self.entries.len();

        self.stats.record_expirations(count);
        self.stats.set_total_entries(self.entries.len());
        count
    }

    /// Returns the cached keys in sorted order.
    pub fn keys(&self) -> Vec<CacheKey> {
        let mut keys: Vec<CacheKey> = self.entries.keys().cloned().collect();
        keys.sort();
        keys
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    /// Returns the validity window applied to new entries.
    pub fn revalidate_secs(&self) -> Option<u64> {
        self.revalidate_secs
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
