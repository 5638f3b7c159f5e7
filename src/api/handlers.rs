//! API Handlers
//!
//! HTTP request handlers for each blog frontend endpoint.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::cache::{ContentCache, ContentFetcher};
use crate::config::Config;
use crate::content::{
    as_categories, as_post, as_posts, as_slugs, BlogService, ContentSource, GraphQlClient,
    PageSizes,
};
use crate::error::Result;
use crate::models::{
    HealthResponse, RevalidateRequest, RevalidateResponse, StaticParam, StatsResponse,
};
use crate::views::{post_cards, CategoryList, PostCard, PostDetail};

/// Application state shared across all handlers.
///
/// The cache is constructed once here and injected into the fetcher, the
/// sweep task and the stats endpoint.
#[derive(Clone)]
pub struct AppState {
    /// Cached content queries
    pub service: BlogService,
    /// Shared content cache
    pub cache: Arc<RwLock<ContentCache>>,
    /// Image substituted for posts without a usable featured image
    pub fallback_image_url: Arc<str>,
}

impl AppState {
    /// Creates a new AppState around the given content source.
    pub fn new(source: Arc<dyn ContentSource>, config: &Config) -> Self {
        let cache = Arc::new(RwLock::new(ContentCache::new(config.revalidate_secs)));
        let fetcher = ContentFetcher::new(Arc::clone(&cache));
        let page_sizes = PageSizes {
            posts: config.posts_page_size,
            categories: config.categories_page_size,
        };

        Self {
            service: BlogService::new(source, fetcher, page_sizes),
            cache,
            fallback_image_url: Arc::from(config.fallback_image_url.as_str()),
        }
    }

    /// Creates a new AppState backed by the configured GraphQL endpoint.
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = GraphQlClient::new(&config.content_api_url, config.request_timeout_secs)?;
        tracing::info!(endpoint = client.endpoint(), "Content backend configured");
        Ok(Self::new(Arc::new(client), config))
    }
}

/// Handler for GET /posts
///
/// Returns the posts listing as cards.
pub async fn posts_handler(State(state): State<AppState>) -> Result<Json<Vec<PostCard>>> {
    let payload = state.service.all_posts().await?;
    let list = as_posts(&payload)?;

    Ok(Json(post_cards(&list.posts, &state.fallback_image_url)))
}

/// Handler for GET /posts/:slug
///
/// Fetch failures and unknown slugs both answer 404.
pub async fn post_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<PostDetail>> {
    let payload = state.service.post(&slug).await?;
    let post = as_post(&payload)?;

    Ok(Json(PostDetail::from_post(post, &state.fallback_image_url)))
}

/// Handler for GET /categories
pub async fn categories_handler(State(state): State<AppState>) -> Result<Json<CategoryList>> {
    let payload = state.service.categories().await?;
    let categories = as_categories(&payload)?;

    Ok(Json(CategoryList::from_categories(categories)))
}

/// Handler for GET /static-params
///
/// Lists every post slug for static page generation.
pub async fn static_params_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<StaticParam>>> {
    let payload = state.service.static_slugs().await?;
    let params = as_slugs(&payload)?
        .iter()
        .map(|slug| StaticParam { slug: slug.clone() })
        .collect();

    Ok(Json(params))
}

/// Handler for POST /revalidate
///
/// Drops one cache key, or the whole cache when no key is given.
pub async fn revalidate_handler(
    State(state): State<AppState>,
    Json(req): Json<RevalidateRequest>,
) -> Result<Json<RevalidateResponse>> {
    let response = match req.target()? {
        Some(key) => {
            let removed = state.service.revalidate(&key).await;
            RevalidateResponse::for_key(key.as_str(), removed)
        }
        None => RevalidateResponse::for_all(state.service.revalidate_all().await),
    };

    Ok(Json(response))
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let cache = state.cache.read().await;
    let keys = cache.keys().into_iter().map(|k| k.to_string()).collect();

    Json(StatsResponse::new(
        &cache.stats(),
        cache.revalidate_secs(),
        keys,
    ))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
