//! Blog Service
//!
//! The logical queries the frontend needs, each memoized under its own key.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::cache::{CacheKey, ContentFetcher};
use crate::content::{Category, ContentPayload, ContentSource, Post, PostList};
use crate::error::{BlogError, Result};

/// Page sizes used for listing queries.
#[derive(Debug, Clone, Copy)]
pub struct PageSizes {
    pub posts: u32,
    pub categories: u32,
}

impl Default for PageSizes {
    fn default() -> Self {
        Self {
            posts: 100,
            categories: 100,
        }
    }
}

// == Blog Service ==
/// Serves typed content through the cached fetcher.
#[derive(Clone)]
pub struct BlogService {
    source: Arc<dyn ContentSource>,
    fetcher: ContentFetcher,
    page_sizes: PageSizes,
}

impl BlogService {
    pub fn new(source: Arc<dyn ContentSource>, fetcher: ContentFetcher, page_sizes: PageSizes) -> Self {
        Self {
            source,
            fetcher,
            page_sizes,
        }
    }

    pub fn fetcher(&self) -> &ContentFetcher {
        &self.fetcher
    }

    // == All Posts ==
    /// Returns the newest page of posts, cached under `posts`.
    pub async fn all_posts(&self) -> Result<Arc<ContentPayload>> {
        let key = CacheKey::posts();
        let first = self.page_sizes.posts;
        let payload = self
            .fetcher
            .fetch(&key, || async move {
                let list = self.source.list_posts(first, None).await?;
                Ok(ContentPayload::Posts(list))
            })
            .await?;

        expect_kind(&key, payload, |p| matches!(p, ContentPayload::Posts(_)))
    }

    // == Post By Slug ==
    /// Returns one post, cached under `post:{slug}`.
    ///
    /// A slug the backend does not know is `NotFound` and is not cached.
    pub async fn post(&self, slug: &str) -> Result<Arc<ContentPayload>> {
        let slug = slug.trim();
        if slug.is_empty() {
            return Err(BlogError::InvalidRequest("Slug cannot be empty".to_string()));
        }

        let key = CacheKey::post(slug);
        let payload = self
            .fetcher
            .fetch(&key, || async move {
                match self.source.post_by_slug(slug).await? {
                    Some(post) => Ok(ContentPayload::Post(post)),
                    None => Err(BlogError::NotFound(format!("post '{slug}'"))),
                }
            })
            .await?;

        expect_kind(&key, payload, |p| matches!(p, ContentPayload::Post(_)))
    }

    // == Categories ==
    /// Returns all categories, cached under `categories`.
    pub async fn categories(&self) -> Result<Arc<ContentPayload>> {
        let key = CacheKey::categories();
        let first = self.page_sizes.categories;
        let payload = self
            .fetcher
            .fetch(&key, || async move {
                let categories = self.source.list_categories(first).await?;
                Ok(ContentPayload::Categories(categories))
            })
            .await?;

        expect_kind(&key, payload, |p| matches!(p, ContentPayload::Categories(_)))
    }

    // == Static Slugs ==
    /// Returns every post slug across all pages, cached under `post-slugs`.
    ///
    /// Follows `endCursor` while `hasNextPage` is set. A repeated or missing
    /// cursor ends the walk.
    pub async fn static_slugs(&self) -> Result<Arc<ContentPayload>> {
        let key = CacheKey::post_slugs();
        let payload = self
            .fetcher
            .fetch(&key, || async move {
                let slugs = self.collect_slugs().await?;
                info!(count = slugs.len(), "Collected post slugs for static paths");
                Ok(ContentPayload::PostSlugs(slugs))
            })
            .await?;

        expect_kind(&key, payload, |p| matches!(p, ContentPayload::PostSlugs(_)))
    }

    async fn collect_slugs(&self) -> Result<Vec<String>> {
        let mut slugs = Vec::new();
        let mut seen_cursors = HashSet::new();
        let mut after: Option<String> = None;

        loop {
            let PostList { posts, page_info } = self
                .source
                .list_posts(self.page_sizes.posts, after.as_deref())
                .await?;
            debug!(page_len = posts.len(), "Fetched posts page");
            slugs.extend(posts.into_iter().map(|post| post.slug));

            if !page_info.has_next_page {
                break;
            }
            match page_info.end_cursor {
                Some(cursor) if seen_cursors.insert(cursor.clone()) => after = Some(cursor),
                _ => {
                    warn!("Posts pagination stalled, stopping slug collection");
                    break;
                }
            }
        }

        Ok(slugs)
    }

    // == Revalidation ==
    /// Drops the cached result for one key.
    pub async fn revalidate(&self, key: &CacheKey) -> bool {
        let removed = self.fetcher.invalidate(key).await;
        info!(key = %key, removed, "Revalidated cache key");
        removed
    }

    /// Drops every cached result.
    pub async fn revalidate_all(&self) -> usize {
        let removed = self.fetcher.invalidate_all().await;
        info!(removed, "Revalidated entire content cache");
        removed
    }
}

impl std::fmt::Debug for BlogService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlogService")
            .field("page_sizes", &self.page_sizes)
            .finish_non_exhaustive()
    }
}

/// Guards against a key holding a payload of the wrong shape.
fn expect_kind(
    key: &CacheKey,
    payload: Arc<ContentPayload>,
    is_expected: impl Fn(&ContentPayload) -> bool,
) -> Result<Arc<ContentPayload>> {
    if is_expected(&payload) {
        Ok(payload)
    } else {
        Err(BlogError::Internal(format!(
            "cache key '{key}' holds unexpected {} payload",
            payload.kind()
        )))
    }
}

/// Borrows the posts out of a `Posts` payload.
pub fn as_posts(payload: &ContentPayload) -> Result<&PostList> {
    match payload {
        ContentPayload::Posts(list) => Ok(list),
        other => Err(unexpected("posts", other)),
    }
}

/// Borrows the post out of a `Post` payload.
pub fn as_post(payload: &ContentPayload) -> Result<&Post> {
    match payload {
        ContentPayload::Post(post) => Ok(post),
        other => Err(unexpected("post", other)),
    }
}

/// Borrows the categories out of a `Categories` payload.
pub fn as_categories(payload: &ContentPayload) -> Result<&[Category]> {
    match payload {
        ContentPayload::Categories(categories) => Ok(categories),
        other => Err(unexpected("categories", other)),
    }
}

/// Borrows the slugs out of a `PostSlugs` payload.
pub fn as_slugs(payload: &ContentPayload) -> Result<&[String]> {
    match payload {
        ContentPayload::PostSlugs(slugs) => Ok(slugs),
        other => Err(unexpected("post_slugs", other)),
    }
}

fn unexpected(wanted: &str, got: &ContentPayload) -> BlogError {
    BlogError::Internal(format!("expected {wanted} payload, got {}", got.kind()))
}
