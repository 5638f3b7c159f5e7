//! Cached Content Fetcher
//!
//! Memoizes backend queries per cache key on top of the shared `ContentCache`.

use std::future::Future;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::cache::{CacheKey, ContentCache};
use crate::content::ContentPayload;
use crate::error::Result;

// == Content Fetcher ==
/// Wraps content queries behind the key-scoped cache.
///
/// Concurrent cold fetches for the same key may each run their query. Only
/// successful results are ever stored.
#[derive(Debug, Clone)]
pub struct ContentFetcher {
    cache: Arc<RwLock<ContentCache>>,
}

impl ContentFetcher {
    pub fn new(cache: Arc<RwLock<ContentCache>>) -> Self {
        Self { cache }
    }

    /// Returns the shared cache handle.
    pub fn cache(&self) -> &Arc<RwLock<ContentCache>> {
        &self.cache
    }

    // == Fetch ==
    /// Returns the cached payload for `key`, or runs `query` and caches its result.
    ///
    /// The cache lock is not held while `query` runs. A failing query leaves
    /// the key uncached and its error is returned unchanged.
    pub async fn fetch<F, Fut>(&self, key: &CacheKey, query: F) -> Result<Arc<ContentPayload>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<ContentPayload>>,
    {
        // Write lock: a lookup updates stats and may drop an expired entry
        let cached = self.cache.write().await.get(key);
        if let Some(payload) = cached {
            debug!(key = %key, "Content cache hit");
            return Ok(payload);
        }

        debug!(key = %key, "Content cache miss, querying backend");

        match query().await {
            Ok(payload) => {
                let payload = Arc::new(payload);
                self.cache
                    .write()
                    .await
                    .set(key.clone(), Arc::clone(&payload));
                debug!(key = %key, kind = payload.kind(), "Stored content in cache");
                Ok(payload)
            }
            Err(err) => {
                warn!(key = %key, error = %err, "Content query failed, nothing cached");
                Err(err)
            }
        }
    }

    // == Invalidate ==
    /// Drops the cached result for `key`. Returns true if one was present.
    pub async fn invalidate(&self, key: &CacheKey) -> bool {
        self.cache.write().await.invalidate(key)
    }

    /// Drops every cached result. Returns the number removed.
    pub async fn invalidate_all(&self) -> usize {
        self.cache.write().await.invalidate_all()
    }
}
