//! Handlers for record management endpoints (list, update, delete).

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::url::{MessageResponse, UpdateUrlRequest, UrlRecordResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Lists every stored record.
///
/// # Endpoint
///
/// `GET /urls`
///
/// Unordered full scan, no pagination.
pub async fn list_urls_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<UrlRecordResponse>>, AppError> {
    let records = state.url_service.list().await?;
    Ok(Json(records.into_iter().map(Into::into).collect()))
}

/// Changes the destination of a short code.
///
/// # Endpoint
///
/// `PUT /urls/{code}`
///
/// ```json
/// { "long_url": "https://new-destination.com" }
/// ```
///
/// # Errors
///
/// - 400 Bad Request if `long_url` is missing, empty or invalid
/// - 404 Not Found if the code doesn't exist (`not_found`) or already points
///   to this URL (`unchanged`)
pub async fn update_url_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
    payload: Result<Json<UpdateUrlRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let Json(payload) = payload?;

    if payload.long_url.trim().is_empty() {
        return Err(AppError::bad_request(
            "Long URL cannot be empty",
            json!({ "field": "long_url" }),
        ));
    }
    payload.validate()?;

    state
        .url_service
        .update_long_url(&code, &payload.long_url)
        .await?;

    Ok(Json(MessageResponse::new("URL updated successfully")))
}

/// Deletes a short code, making it available again.
///
/// # Endpoint
///
/// `DELETE /urls/{code}`
///
/// # Errors
///
/// - 404 Not Found if the code doesn't exist
/// - 500 Internal Server Error on store failure
pub async fn delete_url_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, AppError> {
    state.url_service.delete(&code).await?;
    Ok(Json(MessageResponse::new("URL deleted successfully")))
}
