//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// Responds with `301 Moved Permanently`. The click counter is updated before
/// responding, but a failed update never turns the redirect into an error.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let record = state.url_service.resolve(&code).await?;

    debug!(%code, target = %record.long_url, "Redirecting");

    Ok((
        StatusCode::MOVED_PERMANENTLY,
        [(header::LOCATION, record.long_url)],
    )
        .into_response())
}
