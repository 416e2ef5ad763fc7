//! DTOs for per-code statistics.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::UrlRecord;

/// Usage statistics for a short code.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub long_url: String,
    pub short_code: String,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
    pub last_clicked_at: Option<DateTime<Utc>>,
}

impl From<UrlRecord> for StatsResponse {
    fn from(r: UrlRecord) -> Self {
        Self {
            long_url: r.long_url,
            short_code: r.short_code,
            clicks: r.clicks,
            created_at: r.created_at,
            last_clicked_at: r.last_clicked_at,
        }
    }
}
