// src/api/parser.rs
//! Response parsing with structured error extraction.
//!
//! Successful bodies decode through serde into the wire envelopes; non-2xx
//! bodies are parsed into the typed backend error vocabulary, falling back
//! to the bare HTTP status when the body is unparseable.

use super::client::ApiResponse;
use crate::constants::ERROR_BODY_PREVIEW_LENGTH;
use crate::error::{AppError, BackendErrorCode};

/// Parse any backend response, routing non-2xx statuses to error parsing.
pub fn parse_api_response<T>(result: ApiResponse<String>) -> Result<T, AppError>
where
    T: serde::de::DeserializeOwned,
{
    if result.status.is_success() {
        parse_success(&result.data, &result.url)
    } else {
        parse_error(&result.data, result.status, &result.url)
    }
}

fn parse_success<T>(body: &str, url: &str) -> Result<T, AppError>
where
    T: serde::de::DeserializeOwned,
{
    serde_json::from_str(body).map_err(|e| {
        log::error!("Failed to parse response from {}: {}", url, e);

        let preview = if body.len() > ERROR_BODY_PREVIEW_LENGTH {
            format!("{}...", &body[..ERROR_BODY_PREVIEW_LENGTH])
        } else {
            body.to_string()
        };

        AppError::MalformedResponse(format!("{} (body: {})", e, preview))
    })
}

fn parse_error<T>(body: &str, status: reqwest::StatusCode, url: &str) -> Result<T, AppError> {
    // Try the structured error body first
    if let Ok(backend_error) = serde_json::from_str::<super::responses::BackendError>(body) {
        return Err(AppError::ContentService {
            code: BackendErrorCode::from_api_response(&backend_error.code),
            message: backend_error.message,
            status,
        });
    }

    // Fallback to a generic error carrying the HTTP status code
    Err(AppError::ContentService {
        code: BackendErrorCode::from_http_status(status.as_u16()),
        message: format!("HTTP {} from {}", status, url),
        status,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TypedContentRecord;

    fn response(status: u16, body: &str) -> ApiResponse<String> {
        ApiResponse {
            data: body.to_string(),
            status: reqwest::StatusCode::from_u16(status).unwrap(),
            url: "https://api.example.com/test".to_string(),
        }
    }

    #[test]
    fn parses_structured_error_body() {
        let result = parse_api_response::<TypedContentRecord>(response(
            404,
            r#"{"code": "not_found", "message": "no record 42"}"#,
        ));

        match result {
            Err(AppError::ContentService { code, message, .. }) => {
                assert_eq!(code, BackendErrorCode::RecordNotFound);
                assert_eq!(message, "no record 42");
            }
            other => panic!("expected ContentService error, got {:?}", other.err()),
        }
    }

    #[test]
    fn falls_back_to_http_status_on_unparseable_error_body() {
        let result = parse_api_response::<TypedContentRecord>(response(503, "<html>oops</html>"));

        match result {
            Err(AppError::ContentService { code, .. }) => {
                assert_eq!(code, BackendErrorCode::HttpStatus(503));
                assert!(code.is_retryable() || matches!(code, BackendErrorCode::HttpStatus(_)));
            }
            other => panic!("expected ContentService error, got {:?}", other.err()),
        }
    }

    #[test]
    fn malformed_success_body_is_a_typed_error() {
        let result = parse_api_response::<TypedContentRecord>(response(200, "not json"));
        assert!(matches!(result, Err(AppError::MalformedResponse(_))));
    }

    #[test]
    fn parses_successful_record_body() {
        let record = parse_api_response::<TypedContentRecord>(response(
            200,
            r#"{"id": 3, "contentType": "HERO_HEADING", "title": "Hello"}"#,
        ))
        .unwrap();
        assert_eq!(record.title, "Hello");
    }
}
