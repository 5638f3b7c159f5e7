//! Cache Key Module
//!
//! Stable identifiers for one logical query plus its parameters.

use std::fmt;

use crate::cache::MAX_KEY_LENGTH;
use crate::error::{BlogError, Result};

// == Cache Key ==
/// Identifies one logical content query.
///
/// The constructors produce `"posts"`, `"post:{slug}"`, `"categories"` and
/// `"post-slugs"`, which never collide with each other.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CacheKey(String);

impl CacheKey {
    /// Key for the posts listing.
    pub fn posts() -> Self {
        Self("posts".to_string())
    }

    /// Key for a single post looked up by slug.
    pub fn post(slug: &str) -> Self {
        Self(format!("post:{slug}"))
    }

    /// Key for the categories listing.
    pub fn categories() -> Self {
        Self("categories".to_string())
    }

    /// Key for the full list of post slugs used for static paths.
    pub fn post_slugs() -> Self {
        Self("post-slugs".to_string())
    }

    /// Wraps a raw key string, e.g. one received from a revalidation request.
    pub fn parse(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(BlogError::InvalidRequest(
                "Cache key cannot be empty".to_string(),
            ));
        }
        if raw.len() > MAX_KEY_LENGTH {
            return Err(BlogError::InvalidRequest(format!(
                "Cache key exceeds maximum length of {} bytes",
                MAX_KEY_LENGTH
            )));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
