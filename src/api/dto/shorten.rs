//! DTOs for link shortening endpoint.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::Validate;

/// Letters and digits only; empty is allowed and means "generate one".
static SHORT_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9]*$").expect("valid short code regex"));

/// Request to shorten a single URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL to shorten.
    #[validate(url(message = "Invalid URL format"))]
    pub long_url: String,

    /// Optional custom short code. Absent, `null` or `""` all mean "generate".
    #[validate(length(max = 64, message = "Short code must be at most 64 characters"))]
    #[validate(regex(
        path = *SHORT_CODE_REGEX,
        message = "Short code can only contain letters and digits"
    ))]
    pub short_code: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub short_url: String,
    pub short_code: String,
}
