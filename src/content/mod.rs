//! Content Module
//!
//! Typed content models, the backend client, and the cached blog service.

mod graphql;
pub mod models;
pub mod queries;
mod service;
mod source;

pub use graphql::GraphQlClient;
pub use models::{Category, CategoryRef, ContentPayload, FeaturedImage, PageInfo, Post, PostList};
pub use service::{as_categories, as_post, as_posts, as_slugs, BlogService, PageSizes};
pub use source::ContentSource;
