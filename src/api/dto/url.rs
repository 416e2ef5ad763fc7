//! DTOs for the record management endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::UrlRecord;

/// Full JSON representation of a stored record, as listed by `GET /urls`.
#[derive(Debug, Serialize)]
pub struct UrlRecordResponse {
    pub id: i64,
    pub short_code: String,
    pub long_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
    pub owner_id: Option<i64>,
    pub clicks: i64,
    pub last_clicked_at: Option<DateTime<Utc>>,
}

impl From<UrlRecord> for UrlRecordResponse {
    fn from(r: UrlRecord) -> Self {
        Self {
            id: r.id,
            short_code: r.short_code,
            long_url: r.long_url,
            created_at: r.created_at,
            expires_at: r.expires_at,
            owner_id: r.owner_id,
            clicks: r.clicks,
            last_clicked_at: r.last_clicked_at,
        }
    }
}

/// Request body for `PUT /urls/{code}`.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateUrlRequest {
    /// New destination. Missing and empty are both rejected.
    #[serde(default)]
    #[validate(url(message = "Invalid URL format"))]
    pub long_url: String,
}

/// Plain confirmation body.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
