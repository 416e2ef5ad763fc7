//! Short code allocation with collision retry.

use std::sync::Arc;
use tracing::{debug, warn};

use crate::domain::UrlError;
use crate::domain::repositories::UrlRepository;
use crate::utils::code_generator::generate;

/// Picks a short code that is currently free in the store.
///
/// The existence check and the later insert are separate store calls, so a
/// concurrent writer can still take the code in between. No lock is held to
/// prevent that: the store's insert rejects the loser with
/// [`UrlError::DuplicateCode`] and the caller decides what to do.
pub struct CodeAllocator {
    repository: Arc<dyn UrlRepository>,
    code_length: i64,
    max_attempts: u32,
}

impl CodeAllocator {
    /// Creates an allocator generating codes of `code_length` symbols and
    /// giving up after `max_attempts` colliding draws.
    pub fn new(repository: Arc<dyn UrlRepository>, code_length: i64, max_attempts: u32) -> Self {
        Self {
            repository,
            code_length,
            max_attempts,
        }
    }

    /// Resolves the code a new record should use.
    ///
    /// - A non-empty `custom` code is returned unchanged if no record holds it.
    /// - Otherwise random codes are drawn until one is absent from the store,
    ///   at most `max_attempts` times.
    ///
    /// # Errors
    ///
    /// Returns [`UrlError::CodeConflict`] if the custom code is taken.
    /// Returns [`UrlError::AllocationExhausted`] if every draw collided.
    /// Propagates generator and store failures.
    pub async fn allocate(&self, custom: Option<&str>) -> Result<String, UrlError> {
        if let Some(code) = custom.filter(|c| !c.is_empty()) {
            if self.repository.exists(code).await? {
                return Err(UrlError::CodeConflict(code.to_string()));
            }
            return Ok(code.to_string());
        }

        let mut draws = 0;
        self.allocate_generated(&mut draws).await
    }

    /// Draws random codes until one is absent from the store.
    ///
    /// `draws` counts every draw made so far and is shared by callers that
    /// allocate again after losing an insert race, so the total number of
    /// draws for one record never exceeds `max_attempts`.
    ///
    /// # Errors
    ///
    /// Returns [`UrlError::AllocationExhausted`] once `draws` reaches the limit.
    pub async fn allocate_generated(&self, draws: &mut u32) -> Result<String, UrlError> {
        while *draws < self.max_attempts {
            *draws += 1;
            let attempt = *draws;
            let candidate = generate(self.code_length)?;

            if !self.repository.exists(&candidate).await? {
                debug!(code = %candidate, attempt, "Allocated short code");
                return Ok(candidate);
            }

            warn!(code = %candidate, attempt, "Generated short code collided, retrying");
        }

        Err(UrlError::AllocationExhausted {
            attempts: self.max_attempts,
        })
    }
}
