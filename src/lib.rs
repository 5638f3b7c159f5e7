//! Headless Blog - A blog frontend over a headless CMS
//!
//! Fetches posts and categories from a GraphQL content backend, memoizes
//! each logical query in a key-scoped cache, and shapes the results into
//! view models with largest-image selection and date formatting.

pub mod api;
pub mod cache;
pub mod config;
pub mod content;
pub mod error;
pub mod media;
pub mod models;
pub mod tasks;
pub mod views;

pub use api::AppState;
pub use config::Config;
pub use error::{BlogError, Result};
pub use media::{select_largest, ImageVariant};
pub use tasks::spawn_cleanup_task;
