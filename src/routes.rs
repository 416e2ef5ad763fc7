//! Top-level router configuration.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Configured origin allow-list
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use tower::Layer;
use tower_http::cors::CorsLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `cors` - cross-origin policy built from configuration
pub fn app_router(state: AppState, cors: CorsLayer) -> NormalizePath<Router> {
    let router = api::routes::api_routes()
        .with_state(state)
        .layer(cors)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
