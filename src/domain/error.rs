//! Typed failures raised by the code generator, the allocator and the record store.

use std::time::Duration;
use thiserror::Error;

/// Errors produced while allocating short codes or operating on URL records.
///
/// The API layer maps each variant to an HTTP status in
/// [`crate::error::AppError`]; causes of infrastructure failures are only
/// logged server-side.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UrlError {
    /// Malformed input (bad URL, bad custom code, non-positive length).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A caller-supplied custom code already belongs to an active record.
    #[error("short code '{0}' is already in use")]
    CodeConflict(String),

    /// The store rejected an insert because of its uniqueness constraint.
    #[error("a record with short code '{0}' already exists")]
    DuplicateCode(String),

    #[error("no record for short code '{0}'")]
    NotFound(String),

    /// An edit asked for the value the record already holds.
    #[error("record '{0}' already points to the requested URL")]
    Unchanged(String),

    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("entropy source failed: {0}")]
    EntropySource(String),

    /// The generation loop hit its configured attempt limit.
    #[error("no free short code found after {attempts} attempts")]
    AllocationExhausted { attempts: u32 },

    /// A store operation exceeded its deadline. Retryable by the caller.
    #[error("store operation timed out after {0:?}")]
    Timeout(Duration),
}

impl UrlError {
    /// Returns true for failures caused by infrastructure rather than input.
    pub fn is_infrastructure(&self) -> bool {
        matches!(
            self,
            Self::StorageUnavailable(_)
                | Self::EntropySource(_)
                | Self::AllocationExhausted { .. }
                | Self::Timeout(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_code() {
        let err = UrlError::CodeConflict("promo".to_string());
        assert_eq!(err.to_string(), "short code 'promo' is already in use");
    }

    #[test]
    fn test_infrastructure_classification() {
        assert!(UrlError::StorageUnavailable("down".into()).is_infrastructure());
        assert!(UrlError::AllocationExhausted { attempts: 3 }.is_infrastructure());
        assert!(UrlError::Timeout(Duration::from_secs(5)).is_infrastructure());
        assert!(!UrlError::NotFound("abc".into()).is_infrastructure());
        assert!(!UrlError::InvalidArgument("bad".into()).is_infrastructure());
    }
}
