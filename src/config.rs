//! Configuration Module
//!
//! Handles loading and managing frontend configuration from environment variables.

use std::env;

/// Default content backend endpoint used when `CONTENT_API_URL` is unset.
pub const DEFAULT_CONTENT_API_URL: &str = "http://localhost:8080/graphql";

/// Default image shown for posts without a featured image.
pub const DEFAULT_FALLBACK_IMAGE_URL: &str = "/static/default-banner.png";

/// Frontend configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// GraphQL endpoint of the content backend
    pub content_api_url: String,
    /// Image reference substituted when a post has no featured image
    pub fallback_image_url: String,
    /// HTTP server port
    pub server_port: u16,
    /// Validity window for cached content in seconds, None = until invalidated
    pub revalidate_secs: Option<u64>,
    /// Background sweep interval in seconds
    pub cleanup_interval: u64,
    /// Number of posts requested per page
    pub posts_page_size: u32,
    /// Number of categories requested
    pub categories_page_size: u32,
    /// Backend request timeout in seconds
    pub request_timeout_secs: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CONTENT_API_URL` - Backend GraphQL endpoint
    /// - `FALLBACK_IMAGE_URL` - Default post image
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `REVALIDATE_SECS` - Cache validity window, 0 or unset disables expiry
    /// - `CLEANUP_INTERVAL` - Sweep frequency in seconds (default: 60)
    /// - `POSTS_PAGE_SIZE` - Posts per query page (default: 100)
    /// - `CATEGORIES_PAGE_SIZE` - Categories per query (default: 100)
    /// - `REQUEST_TIMEOUT_SECS` - Backend request timeout (default: 30)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            content_api_url: env::var("CONTENT_API_URL")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.content_api_url),
            fallback_image_url: env::var("FALLBACK_IMAGE_URL")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.fallback_image_url),
            server_port: parse_var("SERVER_PORT").unwrap_or(defaults.server_port),
            revalidate_secs: parse_var::<u64>("REVALIDATE_SECS").filter(|secs| *secs > 0),
            cleanup_interval: parse_var::<u64>("CLEANUP_INTERVAL")
                .filter(|secs| *secs > 0)
                .unwrap_or(defaults.cleanup_interval),
            posts_page_size: parse_var::<u32>("POSTS_PAGE_SIZE")
                .filter(|n| *n > 0)
                .unwrap_or(defaults.posts_page_size),
            categories_page_size: parse_var::<u32>("CATEGORIES_PAGE_SIZE")
                .filter(|n| *n > 0)
                .unwrap_or(defaults.categories_page_size),
            request_timeout_secs: parse_var("REQUEST_TIMEOUT_SECS")
                .unwrap_or(defaults.request_timeout_secs),
        }
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            content_api_url: DEFAULT_CONTENT_API_URL.to_string(),
            fallback_image_url: DEFAULT_FALLBACK_IMAGE_URL.to_string(),
            server_port: 3000,
            revalidate_secs: None,
            cleanup_interval: 60,
            posts_page_size: 100,
            categories_page_size: 100,
            request_timeout_secs: 30,
        }
    }
}
