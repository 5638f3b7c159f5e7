//! Content Source Port
//!
//! The seam between the blog service and whatever serves the content.

use async_trait::async_trait;

use crate::content::{Category, Post, PostList};
use crate::error::Result;

/// Read access to the content backend.
///
/// Implementations report transport and backend failures as
/// `BlogError::ContentFetch`.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Fetches one page of posts, newest first.
    async fn list_posts(&self, first: u32, after: Option<&str>) -> Result<PostList>;

    /// Looks up a single post by slug. Returns None when no such post exists.
    async fn post_by_slug(&self, slug: &str) -> Result<Option<Post>>;

    /// Fetches up to `first` categories.
    async fn list_categories(&self, first: u32) -> Result<Vec<Category>>;
}
