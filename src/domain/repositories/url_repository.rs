//! Repository trait for URL record storage.

use crate::domain::entities::{NewUrlRecord, UpdateOutcome, UrlRecord};
use crate::domain::error::UrlError;
use async_trait::async_trait;

/// Storage contract for URL records.
///
/// Implementations must make [`UrlRepository::insert`] itself reject duplicate
/// short codes atomically. The allocator's existence check is only a fast
/// path; concurrent writers are arbitrated here.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryUrlRepository`] - process-local store
/// - [`crate::infrastructure::persistence::TimedUrlRepository`] - per-call deadline decorator
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Stores a new record and returns it with its assigned id and timestamps.
    ///
    /// # Errors
    ///
    /// Returns [`UrlError::DuplicateCode`] if the short code is already stored.
    /// Returns [`UrlError::StorageUnavailable`] on storage errors.
    async fn insert(&self, new_record: NewUrlRecord) -> Result<UrlRecord, UrlError>;

    /// Finds a record by exact short code.
    ///
    /// # Errors
    ///
    /// Returns [`UrlError::StorageUnavailable`] on storage errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<UrlRecord>, UrlError>;

    /// Returns true if a record with this short code exists.
    async fn exists(&self, code: &str) -> Result<bool, UrlError>;

    /// Atomically adds one click and stamps `last_clicked_at` with the current time.
    ///
    /// Returns `Ok(false)` if the record no longer exists.
    async fn increment_clicks(&self, code: &str) -> Result<bool, UrlError>;

    /// Replaces the destination of a record.
    ///
    /// # Errors
    ///
    /// Returns [`UrlError::NotFound`] if no record matches `code`.
    async fn update_long_url(&self, code: &str, long_url: &str)
    -> Result<UpdateOutcome, UrlError>;

    /// Removes a record, freeing its short code for reuse.
    ///
    /// Returns `Ok(true)` if a record was deleted, `Ok(false)` if none matched.
    async fn delete(&self, code: &str) -> Result<bool, UrlError>;

    /// Returns every stored record in no particular order.
    async fn list(&self) -> Result<Vec<UrlRecord>, UrlError>;

    /// Checks that the backing store is reachable.
    async fn ping(&self) -> Result<(), UrlError>;
}
