//! API Module
//!
//! HTTP handlers and routing for the blog frontend.
//!
//! # Endpoints
//! - `GET /posts` - Posts listing cards
//! - `GET /posts/:slug` - Single post detail
//! - `GET /categories` - Category navigation
//! - `GET /static-params` - All post slugs
//! - `POST /revalidate` - Drop cached content
//! - `GET /stats` - Cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
