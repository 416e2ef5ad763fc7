//! URL record lifecycle service.

use std::sync::Arc;
use tracing::{info, warn};

use crate::application::services::CodeAllocator;
use crate::domain::UrlError;
use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::domain::repositories::UrlRepository;
use crate::utils::code_generator::validate_custom_code;
use crate::utils::url_validator::validate_long_url;

/// Service for creating, resolving and managing short URLs.
///
/// Owns the allocation policy: custom codes are validated and checked once,
/// generated codes are retried when the store reports a lost insert race.
pub struct UrlService {
    repository: Arc<dyn UrlRepository>,
    allocator: CodeAllocator,
    base_url: String,
}

impl UrlService {
    /// Creates a new URL service.
    ///
    /// `base_url` is the public origin prepended to codes in short URLs.
    pub fn new(
        repository: Arc<dyn UrlRepository>,
        allocator: CodeAllocator,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            repository,
            allocator,
            base_url: base_url.into(),
        }
    }

    /// Creates a short URL for `long_url`.
    ///
    /// # Code selection
    ///
    /// - A non-empty `custom_code` is validated and used as-is
    /// - Otherwise a random code is allocated; if a concurrent writer wins the
    ///   insert for it, a fresh code is allocated. Collisions found by the
    ///   existence check and lost insert races share one draw limit
    ///
    /// # Errors
    ///
    /// Returns [`UrlError::InvalidArgument`] if the URL or custom code is invalid.
    /// Returns [`UrlError::CodeConflict`] if the custom code is already in use.
    /// Returns [`UrlError::AllocationExhausted`] if no free code was found.
    pub async fn shorten(
        &self,
        long_url: &str,
        custom_code: Option<&str>,
    ) -> Result<UrlRecord, UrlError> {
        validate_long_url(long_url)?;

        if let Some(custom) = custom_code.filter(|c| !c.is_empty()) {
            validate_custom_code(custom)?;

            let code = self.allocator.allocate(Some(custom)).await?;
            let record = self
                .repository
                .insert(NewUrlRecord::new(code, long_url))
                .await
                .map_err(|e| match e {
                    UrlError::DuplicateCode(code) => UrlError::CodeConflict(code),
                    other => other,
                })?;

            info!(code = %record.short_code, "Created short URL with custom code");
            return Ok(record);
        }

        let mut draws = 0;
        loop {
            let code = self.allocator.allocate_generated(&mut draws).await?;

            match self
                .repository
                .insert(NewUrlRecord::new(code, long_url))
                .await
            {
                Ok(record) => {
                    info!(code = %record.short_code, "Created short URL");
                    return Ok(record);
                }
                Err(UrlError::DuplicateCode(code)) => {
                    warn!(%code, draws, "Lost insert race for generated code, allocating again");
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Looks up the record behind a redirect and counts the click.
    ///
    /// The click update is best-effort: if it fails or the record vanished in
    /// between, the failure is logged and the redirect still succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`UrlError::NotFound`] if no record matches `code`.
    pub async fn resolve(&self, code: &str) -> Result<UrlRecord, UrlError> {
        let record = self.find(code).await?;

        match self.repository.increment_clicks(code).await {
            Ok(true) => {}
            Ok(false) => warn!(%code, "Record vanished before click could be counted"),
            Err(e) => warn!(%code, error = %e, "Failed to count click"),
        }

        Ok(record)
    }

    /// Returns the record for `code` without counting a click.
    ///
    /// # Errors
    ///
    /// Returns [`UrlError::NotFound`] if no record matches `code`.
    pub async fn stats(&self, code: &str) -> Result<UrlRecord, UrlError> {
        self.find(code).await
    }

    /// Lists every stored record.
    pub async fn list(&self) -> Result<Vec<UrlRecord>, UrlError> {
        self.repository.list().await
    }

    /// Points `code` at a new destination.
    ///
    /// # Errors
    ///
    /// Returns [`UrlError::InvalidArgument`] if `long_url` is invalid.
    /// Returns [`UrlError::NotFound`] if no record matches `code`.
    /// Returns [`UrlError::Unchanged`] if the record already holds `long_url`.
    pub async fn update_long_url(&self, code: &str, long_url: &str) -> Result<UrlRecord, UrlError> {
        validate_long_url(long_url)?;

        let outcome = self.repository.update_long_url(code, long_url).await?;
        if !outcome.is_modified() {
            return Err(UrlError::Unchanged(code.to_string()));
        }

        let record = outcome.into_record();
        info!(%code, id = record.id, "Updated destination");
        Ok(record)
    }

    /// Deletes the record for `code`, freeing the code.
    ///
    /// # Errors
    ///
    /// Returns [`UrlError::NotFound`] if no record matches `code`.
    pub async fn delete(&self, code: &str) -> Result<(), UrlError> {
        if !self.repository.delete(code).await? {
            return Err(UrlError::NotFound(code.to_string()));
        }

        info!(%code, "Deleted short URL");
        Ok(())
    }

    /// Checks that the store answers.
    pub async fn ping(&self) -> Result<(), UrlError> {
        self.repository.ping().await
    }

    /// Constructs the public short URL for `code`.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), code)
    }

    async fn find(&self, code: &str) -> Result<UrlRecord, UrlError> {
        self.repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| UrlError::NotFound(code.to_string()))
    }
}
