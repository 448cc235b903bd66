// src/error.rs
//! Application error types with structured error handling.
//!
//! Error types form the vocabulary for failure modes in the system.
//! Each error variant tells the story of what went wrong and where,
//! enabling composable recovery strategies.

use std::fmt;
use thiserror::Error;

/// Content backend error codes as a typed vocabulary.
///
/// Instead of matching against magic strings like `"not_found"`, the
/// domain vocabulary is encoded in the type system. Each variant tells
/// you exactly what the content API reported and enables pattern-based
/// recovery without stringly-typed dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendErrorCode {
    /// API rate limit exceeded — back off and retry
    RateLimited,
    /// The requested record does not exist or is inaccessible
    RecordNotFound,
    /// API key is invalid or expired
    Unauthorized,
    /// API key lacks permission for this resource
    Forbidden,
    /// Request body failed the backend's validation
    ValidationFailed,
    /// Conflict with current state of the record
    Conflict,
    /// Backend internal server error
    InternalError,
    /// Backend is temporarily unavailable
    ServiceUnavailable,
    /// HTTP status code fallback when the error body is unparseable
    HttpStatus(u16),
    /// An error code this client doesn't recognize yet
    Unknown(String),
}

impl BackendErrorCode {
    /// Parse a backend error code string into the typed vocabulary.
    pub fn from_api_response(code: &str) -> Self {
        match code {
            "rate_limited" => Self::RateLimited,
            "not_found" | "record_not_found" => Self::RecordNotFound,
            "unauthorized" => Self::Unauthorized,
            "forbidden" => Self::Forbidden,
            "validation_error" => Self::ValidationFailed,
            "conflict" => Self::Conflict,
            "internal_server_error" => Self::InternalError,
            "service_unavailable" => Self::ServiceUnavailable,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// Create from an HTTP status code when the error body is unparseable.
    pub fn from_http_status(status: u16) -> Self {
        Self::HttpStatus(status)
    }

    /// Whether this error is transient and worth retrying.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::RateLimited | Self::ServiceUnavailable | Self::InternalError
        )
    }

    /// Whether this error means the record simply doesn't exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::RecordNotFound)
    }
}

impl fmt::Display for BackendErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RateLimited => write!(f, "rate_limited"),
            Self::RecordNotFound => write!(f, "not_found"),
            Self::Unauthorized => write!(f, "unauthorized"),
            Self::Forbidden => write!(f, "forbidden"),
            Self::ValidationFailed => write!(f, "validation_error"),
            Self::Conflict => write!(f, "conflict"),
            Self::InternalError => write!(f, "internal_server_error"),
            Self::ServiceUnavailable => write!(f, "service_unavailable"),
            Self::HttpStatus(code) => write!(f, "http_{}", code),
            Self::Unknown(code) => write!(f, "{}", code),
        }
    }
}

/// Main application error type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Missing configuration: {0}")]
    MissingConfiguration(String),

    #[error("Network failure: {0}")]
    NetworkFailure(#[from] reqwest::Error),

    #[error("Content API returned an error ({code}): {message}")]
    ContentService {
        code: BackendErrorCode,
        message: String,
        status: reqwest::StatusCode,
    },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Filesystem IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error for {}: {source}", path.display())]
    JsonParseError {
        path: std::path::PathBuf,
        source: serde_json::Error,
    },

    #[error("Internal error: {message}")]
    InternalError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error(transparent)]
    ValidationError(#[from] crate::types::ValidationError),
}

// Allow converting from anyhow::Error, preserving error chain
impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::InternalError {
            message: err.to_string(),
            source: None,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::MalformedResponse(err.to_string())
    }
}

/// Domain vocabulary for why a content write failed.
///
/// This is not an error type — it's a classification of the failure reason,
/// enabling domain-specific handling (e.g., a clear message for stale record
/// ids vs. a generic fallback for permission errors).
#[derive(Debug, Clone, PartialEq)]
pub enum WriteFailure {
    /// The record being updated no longer exists on the backend.
    StaleRecord,
    /// The API key lacks permission to write this content.
    PermissionDenied { reason: String },
    /// The payload was rejected by the backend's validation.
    Rejected { reason: String },
    /// Some other failure occurred.
    Other { cause: String },
}

impl fmt::Display for WriteFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StaleRecord => write!(f, "record no longer exists on the backend"),
            Self::PermissionDenied { reason } => write!(f, "permission denied: {}", reason),
            Self::Rejected { reason } => write!(f, "payload rejected: {}", reason),
            Self::Other { cause } => write!(f, "{}", cause),
        }
    }
}

/// Classifies a content write error into a domain-specific failure reason.
///
/// This is a pure function that examines the error structure to determine
/// whether the failure is due to a stale cached record id, a permission
/// issue, or something else.
pub fn classify_write_failure(error: &AppError) -> WriteFailure {
    match error {
        AppError::ContentService { code, message, .. } => {
            if code.is_not_found() {
                WriteFailure::StaleRecord
            } else if matches!(
                code,
                BackendErrorCode::Unauthorized | BackendErrorCode::Forbidden
            ) {
                WriteFailure::PermissionDenied {
                    reason: message.clone(),
                }
            } else if matches!(code, BackendErrorCode::ValidationFailed) {
                WriteFailure::Rejected {
                    reason: message.clone(),
                }
            } else {
                WriteFailure::Other {
                    cause: error.to_string(),
                }
            }
        }
        _ => WriteFailure::Other {
            cause: error.to_string(),
        },
    }
}

/// Result type alias for convenience
pub type Result<T, E = AppError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_error_code_parsing() {
        assert_eq!(
            BackendErrorCode::from_api_response("not_found"),
            BackendErrorCode::RecordNotFound
        );
        assert_eq!(
            BackendErrorCode::from_api_response("something_new"),
            BackendErrorCode::Unknown("something_new".to_string())
        );
    }

    #[test]
    fn test_backend_error_code_is_retryable() {
        assert!(BackendErrorCode::RateLimited.is_retryable());
        assert!(BackendErrorCode::ServiceUnavailable.is_retryable());
        assert!(!BackendErrorCode::RecordNotFound.is_retryable());
        assert!(!BackendErrorCode::Unauthorized.is_retryable());
    }

    #[test]
    fn test_classify_write_failure_stale_record() {
        let err = AppError::ContentService {
            code: BackendErrorCode::RecordNotFound,
            message: "no record 42".to_string(),
            status: reqwest::StatusCode::NOT_FOUND,
        };
        assert_eq!(classify_write_failure(&err), WriteFailure::StaleRecord);
    }

    #[test]
    fn test_classify_write_failure_permission() {
        let err = AppError::ContentService {
            code: BackendErrorCode::Forbidden,
            message: "read-only key".to_string(),
            status: reqwest::StatusCode::FORBIDDEN,
        };
        assert!(matches!(
            classify_write_failure(&err),
            WriteFailure::PermissionDenied { .. }
        ));
    }
}
