//! Destination URL validation.
//!
//! Destinations are stored exactly as submitted; this module only decides
//! whether a string is an acceptable redirect target.

use url::Url;

use crate::domain::UrlError;

/// Errors that can occur during URL validation.
#[derive(Debug, thiserror::Error)]
pub enum UrlValidationError {
    #[error("URL must not be empty")]
    Empty,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL must include a host")]
    MissingHost,
}

impl From<UrlValidationError> for UrlError {
    fn from(e: UrlValidationError) -> Self {
        UrlError::InvalidArgument(e.to_string())
    }
}

/// Checks that `input` is an absolute HTTP(S) URL with a host.
///
/// Rejects potentially dangerous protocols like `javascript:`, `data:` or `file:`,
/// and control characters. The parser silently strips tabs and newlines, but
/// the stored string is sent back verbatim as a `Location` header.
///
/// # Errors
///
/// Returns [`UrlValidationError`] describing the first violated rule.
pub fn validate_long_url(input: &str) -> Result<(), UrlValidationError> {
    if input.trim().is_empty() {
        return Err(UrlValidationError::Empty);
    }

    if input.chars().any(char::is_control) {
        return Err(UrlValidationError::InvalidFormat(
            "URL must not contain control characters".to_string(),
        ));
    }

    let url = Url::parse(input).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlValidationError::UnsupportedProtocol),
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(UrlValidationError::MissingHost);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_http_and_https() {
        assert!(validate_long_url("https://example.com/a/b").is_ok());
        assert!(validate_long_url("http://localhost:8080/path?q=1#frag").is_ok());
    }

    #[test]
    fn test_rejects_empty() {
        assert!(matches!(validate_long_url(""), Err(UrlValidationError::Empty)));
        assert!(matches!(validate_long_url("   "), Err(UrlValidationError::Empty)));
    }

    #[test]
    fn test_rejects_relative() {
        assert!(matches!(
            validate_long_url("not-a-url"),
            Err(UrlValidationError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_rejects_control_characters() {
        for input in [
            "https://example.com/a\nb",
            "https://example.com/\tx",
            "https://example.com/a\r\nSet-Cookie: x=1",
            "https://exa\u{7f}mple.com",
        ] {
            assert!(
                matches!(
                    validate_long_url(input),
                    Err(UrlValidationError::InvalidFormat(_))
                ),
                "{input:?}"
            );
        }
    }

    #[test]
    fn test_rejects_dangerous_schemes() {
        for input in ["javascript:alert(1)", "data:text/html,hi", "file:///etc/passwd"] {
            assert!(
                matches!(
                    validate_long_url(input),
                    Err(UrlValidationError::UnsupportedProtocol)
                ),
                "{input}"
            );
        }
    }

    #[test]
    fn test_converts_into_invalid_argument() {
        let err: UrlError = UrlValidationError::UnsupportedProtocol.into();
        assert!(matches!(err, UrlError::InvalidArgument(_)));
    }
}
