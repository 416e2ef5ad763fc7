//! HTTP-facing error type.
//!
//! Every handler returns [`AppError`], which renders as
//! `{"error": {"code", "message", "details"}}` with a matching status.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use validator::ValidationErrors;

use crate::domain::UrlError;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable error payload.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },
    #[error("{message}")]
    NotFound { message: String, details: Value },
    /// Edit that would not change anything; reported with 404 like a miss.
    #[error("{message}")]
    Unchanged { message: String, details: Value },
    #[error("{message}")]
    Conflict { message: String, details: Value },
    /// Transient infrastructure failure the client may retry.
    #[error("{message}")]
    Unavailable { message: String, details: Value },
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }
    pub fn unavailable(message: impl Into<String>, details: Value) -> Self {
        Self::Unavailable {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// HTTP status this error renders with.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } | AppError::Unchanged { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Unavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn to_error_info(self) -> ErrorInfo {
        let (code, message, details) = match self {
            AppError::Validation { message, details } => ("validation_error", message, details),
            AppError::NotFound { message, details } => ("not_found", message, details),
            AppError::Unchanged { message, details } => ("unchanged", message, details),
            AppError::Conflict { message, details } => ("conflict", message, details),
            AppError::Unavailable { message, details } => ("unavailable", message, details),
            AppError::Internal { message, details } => ("internal_error", message, details),
        };

        ErrorInfo {
            code,
            message,
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<UrlError> for AppError {
    fn from(e: UrlError) -> Self {
        if e.is_infrastructure() {
            tracing::error!(error = %e, "Request failed on infrastructure error");
        }

        match e {
            UrlError::InvalidArgument(reason) => {
                AppError::bad_request("Invalid input", json!({ "reason": reason }))
            }
            UrlError::CodeConflict(code) | UrlError::DuplicateCode(code) => AppError::conflict(
                "Short code already in use",
                json!({ "short_code": code }),
            ),
            UrlError::NotFound(code) => {
                AppError::not_found("Short URL not found", json!({ "short_code": code }))
            }
            UrlError::Unchanged(code) => AppError::Unchanged {
                message: "Short URL already points to this URL, no changes made".to_string(),
                details: json!({ "short_code": code }),
            },
            UrlError::Timeout(_) => {
                AppError::unavailable("Storage did not respond in time, retry later", json!({}))
            }
            UrlError::StorageUnavailable(_) => AppError::internal("Storage error", json!({})),
            UrlError::EntropySource(_) | UrlError::AllocationExhausted { .. } => {
                AppError::internal("Failed to generate short code", json!({}))
            }
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(e: ValidationErrors) -> Self {
        let details = serde_json::to_value(&e).unwrap_or_else(|_| json!({}));
        AppError::bad_request("Validation failed", details)
    }
}

impl From<JsonRejection> for AppError {
    fn from(e: JsonRejection) -> Self {
        AppError::bad_request("Invalid request body", json!({ "reason": e.body_text() }))
    }
}
