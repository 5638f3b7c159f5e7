//! API Routes
//!
//! Configures the Axum router with all blog frontend endpoints.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    categories_handler, health_handler, post_handler, posts_handler, revalidate_handler,
    static_params_handler, stats_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /posts` - Posts listing cards
/// - `GET /posts/:slug` - Single post detail
/// - `GET /categories` - Category navigation
/// - `GET /static-params` - All post slugs for static generation
/// - `POST /revalidate` - Drop cached content
/// - `GET /stats` - Cache statistics
/// - `GET /health` - Health check endpoint
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/posts", get(posts_handler))
        .route("/posts/:slug", get(post_handler))
        .route("/categories", get(categories_handler))
        .route("/static-params", get(static_params_handler))
        .route("/revalidate", post(revalidate_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
