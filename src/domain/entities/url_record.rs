//! URL record entity representing a short code to destination mapping.

use chrono::{DateTime, Utc};

/// A stored short code mapping with usage counters.
///
/// `short_code`, `id` and `created_at` never change after creation.
/// `expires_at` and `owner_id` are carried through storage but nothing
/// enforces or populates them yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRecord {
    pub id: i64,
    pub short_code: String,
    pub long_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
    pub owner_id: Option<i64>,
    pub clicks: i64,
    pub last_clicked_at: Option<DateTime<Utc>>,
}

impl UrlRecord {
    /// Builds a freshly created record: zero clicks, never visited.
    pub fn new(id: i64, short_code: String, long_url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            short_code,
            long_url,
            created_at,
            expires_at: None,
            owner_id: None,
            clicks: 0,
            last_clicked_at: None,
        }
    }

    /// Records one successful redirect at `at`.
    pub fn register_click(&mut self, at: DateTime<Utc>) {
        self.clicks += 1;
        self.last_clicked_at = Some(at);
    }
}

/// Input data for creating a new record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUrlRecord {
    pub short_code: String,
    pub long_url: String,
}

impl NewUrlRecord {
    pub fn new(short_code: impl Into<String>, long_url: impl Into<String>) -> Self {
        Self {
            short_code: short_code.into(),
            long_url: long_url.into(),
        }
    }
}

/// Result of changing a record's destination.
///
/// "No such code" is reported as [`crate::domain::UrlError::NotFound`], so it
/// is never confused with an edit that changed nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    Modified(UrlRecord),
    Unchanged(UrlRecord),
}

impl UpdateOutcome {
    /// The record as stored after the edit attempt.
    pub fn into_record(self) -> UrlRecord {
        match self {
            Self::Modified(record) | Self::Unchanged(record) => record,
        }
    }

    pub fn is_modified(&self) -> bool {
        matches!(self, Self::Modified(_))
    }
}
