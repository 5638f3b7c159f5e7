//! Cache Module
//!
//! Key-scoped memoization of content queries with an optional validity window.

mod entry;
mod fetcher;
mod key;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use fetcher::ContentFetcher;
pub use key::CacheKey;
pub use stats::CacheStats;
pub use store::ContentCache;

// == Public Constants ==
/// Maximum allowed cache key length in bytes
pub const MAX_KEY_LENGTH: usize = 256;
