//! Cross-origin policy for browser clients.

use axum::http::{HeaderName, HeaderValue, Method, header};
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};

const MAX_AGE: Duration = Duration::from_secs(12 * 60 * 60);

/// Builds the CORS layer for the configured origins.
///
/// Allows `GET`, `POST`, `PUT`, `DELETE` and `OPTIONS` with credentials, and
/// lets preflight results be cached for 12 hours. An empty origin list
/// disables cross-origin access entirely.
///
/// # Errors
///
/// Returns an error if an origin is not a valid header value.
pub fn layer(allowed_origins: &[String]) -> Result<CorsLayer, header::InvalidHeaderValue> {
    let origins = allowed_origins
        .iter()
        .map(|origin| HeaderValue::from_str(origin))
        .collect::<Result<Vec<_>, _>>()?;

    let allowed_headers: [HeaderName; 3] =
        [header::ORIGIN, header::CONTENT_TYPE, header::AUTHORIZATION];

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(allowed_headers)
        .expose_headers([header::CONTENT_LENGTH])
        .allow_credentials(true)
        .max_age(MAX_AGE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_valid_origins() {
        let origins = vec![
            "http://localhost:3000".to_string(),
            "https://app.example.com".to_string(),
        ];
        assert!(layer(&origins).is_ok());
    }

    #[test]
    fn test_rejects_invalid_origin() {
        let origins = vec!["http://bad\norigin".to_string()];
        assert!(layer(&origins).is_err());
    }

    #[test]
    fn test_empty_origin_list() {
        assert!(layer(&[]).is_ok());
    }
}
