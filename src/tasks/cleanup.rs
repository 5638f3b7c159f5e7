//! Revalidation Sweep Task
//!
//! Background task that periodically drops cached content whose validity
//! window has elapsed.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::ContentCache;

/// Spawns a background task that periodically removes expired cache entries.
///
/// The task sleeps for the given interval between sweeps and takes the write
/// lock only for the sweep itself.
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// during graceful shutdown.
pub fn spawn_cleanup_task(
    cache: Arc<RwLock<ContentCache>>,
    cleanup_interval_secs: u64,
) -> JoinHandle<()> {
    let interval = Duration::from_secs(cleanup_interval_secs);

    tokio::spawn(async move {
        info!(
            interval_secs = cleanup_interval_secs,
            "Starting content revalidation sweep"
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = {
                let mut cache_guard = cache.write().await;
                cache_guard.cleanup_expired()
            };

            if removed > 0 {
                info!(removed, "Revalidation sweep dropped expired content");
            } else {
                debug!("Revalidation sweep found no expired content");
            }
        }
    })
}
