//! HTTP surface: router plus the ordered request pipeline.
//!
//! Stages, outermost first:
//! 1. `log_requests` - every request is logged
//! 2. `require_api_key` - everything but `/` needs `x-api-key`
//! 3. routing to a handler in [`routes`]
//! 4. error formatting - `ApiError::into_response`, with `CatchPanicLayer`
//!    turning handler panics into 500s

pub mod middleware;
pub mod routes;
pub mod state;

pub use state::AppState;

use axum::middleware::{from_fn, from_fn_with_state};
use axum::routing::get;
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;

use self::middleware::{handle_panic, log_requests, require_api_key};

/// Build the router with every route and pipeline stage.
///
/// The literal `search` and `stats` paths are registered ahead of `{id}`.
/// The collection also answers with a trailing slash.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::welcome))
        .route(
            "/api/products",
            get(routes::list_products).post(routes::create_product),
        )
        .route(
            "/api/products/",
            get(routes::list_products).post(routes::create_product),
        )
        .route("/api/products/search", get(routes::search_products))
        .route("/api/products/stats", get(routes::product_stats))
        .route(
            "/api/products/{id}",
            get(routes::get_product)
                .put(routes::update_product)
                .delete(routes::delete_product),
        )
        .fallback(routes::not_found)
        .method_not_allowed_fallback(routes::not_found)
        // Layers wrap outward: the last one added sees the request first.
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(from_fn_with_state(state.clone(), require_api_key))
        .layer(from_fn(log_requests))
        .with_state(state)
}
