//! Short code generation and validation utilities.
//!
//! Provides cryptographically secure random code generation and validation
//! for custom user-provided codes.

use crate::domain::UrlError;

/// Symbols a short code may contain, in mapping order.
pub const ALPHABET: &[u8; 62] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Length of generated codes.
pub const DEFAULT_CODE_LENGTH: i64 = 6;

/// Upper bound for caller-supplied codes.
pub const MAX_CUSTOM_CODE_LENGTH: usize = 64;

/// Codes that would be shadowed by fixed routes.
const RESERVED_CODES: &[&str] = &["urls", "shorten", "health"];

/// Generates a random code of exactly `length` alphabet symbols.
///
/// Draws `length` bytes from the OS random source via `getrandom` and maps
/// each byte to `ALPHABET[byte % 62]`. Because 256 is not a multiple of 62,
/// bytes 248..=255 land on the first eight symbols, so `a`..`h` are drawn
/// slightly more often than the rest. Uniqueness is not guaranteed here; see
/// [`crate::application::services::CodeAllocator`].
///
/// # Errors
///
/// Returns [`UrlError::InvalidArgument`] if `length <= 0`.
/// Returns [`UrlError::EntropySource`] if the random source fails.
///
/// # Examples
///
/// ```ignore
/// let code = generate(6)?;
/// assert_eq!(code.len(), 6);
/// assert!(code.bytes().all(|b| ALPHABET.contains(&b)));
/// ```
pub fn generate(length: i64) -> Result<String, UrlError> {
    if length <= 0 {
        return Err(UrlError::InvalidArgument(format!(
            "code length must be positive, got {length}"
        )));
    }

    let length = usize::try_from(length)
        .map_err(|_| UrlError::InvalidArgument(format!("code length {length} is too large")))?;

    let mut buffer = vec![0u8; length];
    getrandom::fill(&mut buffer).map_err(|e| UrlError::EntropySource(e.to_string()))?;

    Ok(buffer
        .into_iter()
        .map(|byte| char::from(ALPHABET[usize::from(byte) % ALPHABET.len()]))
        .collect())
}

/// Returns true if every character of `code` belongs to [`ALPHABET`].
pub fn is_alphabet_code(code: &str) -> bool {
    code.bytes().all(|b| b.is_ascii_alphanumeric())
}

/// Validates a user-provided custom short code.
///
/// # Rules
///
/// - Non-empty, at most [`MAX_CUSTOM_CODE_LENGTH`] characters
/// - Only `a-z`, `A-Z`, `0-9`
/// - Not a reserved route segment
///
/// # Errors
///
/// Returns [`UrlError::InvalidArgument`] if any rule is violated.
pub fn validate_custom_code(code: &str) -> Result<(), UrlError> {
    if code.is_empty() || code.len() > MAX_CUSTOM_CODE_LENGTH {
        return Err(UrlError::InvalidArgument(format!(
            "custom code must be 1-{MAX_CUSTOM_CODE_LENGTH} characters"
        )));
    }

    if !is_alphabet_code(code) {
        return Err(UrlError::InvalidArgument(
            "custom code can only contain letters and digits".to_string(),
        ));
    }

    if RESERVED_CODES.contains(&code) {
        return Err(UrlError::InvalidArgument(format!(
            "custom code '{code}' is reserved"
        )));
    }

    Ok(())
}
