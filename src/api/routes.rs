//! API route configuration.

use crate::api::handlers::{
    delete_url_handler, health_handler, list_urls_handler, redirect_handler, shorten_handler,
    stats_handler, update_url_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post, put},
};

/// All service routes.
///
/// # Endpoints
///
/// - `POST   /shorten`       - Create a short URL
/// - `GET    /urls`          - List every record
/// - `PUT    /urls/{code}`   - Change the destination of a code
/// - `DELETE /urls/{code}`   - Delete a code
/// - `GET    /health`        - Store reachability
/// - `GET    /{code}`        - Redirect (301) and count a click
/// - `GET    /{code}/stats`  - Click statistics
///
/// Static segments win over `/{code}`, so `urls`, `shorten` and `health`
/// can never be reached as short codes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/urls", get(list_urls_handler))
        .route(
            "/urls/{code}",
            put(update_url_handler).delete(delete_url_handler),
        )
        .route("/health", get(health_handler))
        .route("/{code}", get(redirect_handler))
        .route("/{code}/stats", get(stats_handler))
}
