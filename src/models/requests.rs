//! Request DTOs for the blog frontend API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

use crate::cache::CacheKey;
use crate::error::Result;

/// Request body for POST /revalidate
///
/// # Fields
/// - `key`: Cache key to drop (e.g. `posts`, `post:my-slug`); absent drops everything
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RevalidateRequest {
    #[serde(default)]
    pub key: Option<String>,
}

impl RevalidateRequest {
    /// Validates the request and returns the targeted key, if any.
    pub fn target(&self) -> Result<Option<CacheKey>> {
        self.key.as_deref().map(CacheKey::parse).transpose()
    }
}
