//! Handler for link shortening endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// {
///   "long_url": "https://example.com/a/b",
///   "short_code": "promo"   // optional
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "short_url": "http://localhost:8081/promo",
///   "short_code": "promo"
/// }
/// ```
///
/// # Errors
///
/// - 400 Bad Request if the body or URL is invalid
/// - 409 Conflict if the custom code is already in use
/// - 500 Internal Server Error on store or generation failure
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<Json<ShortenResponse>, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let record = state
        .url_service
        .shorten(&payload.long_url, payload.short_code.as_deref())
        .await?;

    Ok(Json(ShortenResponse {
        short_url: state.url_service.short_url(&record.short_code),
        short_code: record.short_code,
    }))
}
