use serde_json::Value;
use thiserror::Error;

/// A form failed its presence checks; no request was sent
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0}")]
    MissingFields(&'static str),
    #[error("Passwords do not match")]
    PasswordMismatch,
}

/// Tagged failure of a single resource call
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The request never completed
    #[error("network error: {0}")]
    Network(String),
    /// Non-2xx status. `message` is whatever the body carried, JSON or text.
    #[error("server error {status}: {}", .message.as_deref().unwrap_or("no details"))]
    Http { status: u16, message: Option<String> },
    /// 2xx response whose body did not have the expected shape
    #[error("failed to decode response: {0}")]
    Decode(String),
    #[error("failed to encode request: {0}")]
    Encode(String),
}

impl ApiError {
    /// Build an HTTP error from a status code and the raw response body
    pub fn from_response(status: u16, body: &str) -> Self {
        ApiError::Http {
            status,
            message: extract_error_message(body),
        }
    }

    /// Server-provided message, when the failure carried one
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Http { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// True for failures where the request never produced a usable answer
    pub fn is_unexpected(&self) -> bool {
        matches!(
            self,
            ApiError::Network(_) | ApiError::Decode(_) | ApiError::Encode(_)
        )
    }
}

/// Pull a human-readable message out of an error body.
///
/// Endpoints are inconsistent: some answer `{"error": ...}`, some
/// `{"message": ...}` or `{"status": ...}`, and some plain text. JSON fields
/// are tried in that order; anything else non-blank is returned as text.
pub fn extract_error_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(trimmed) {
        for key in ["error", "message", "status"] {
            if let Some(Value::String(text)) = map.get(key) {
                return Some(text.clone());
            }
        }
    }

    Some(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_json_error_field() {
        let body = r#"{"error":"Missing required fields"}"#;
        assert_eq!(extract_error_message(body).as_deref(), Some("Missing required fields"));
    }

    #[test]
    fn test_extract_prefers_error_over_message() {
        let body = r#"{"message":"ignored","error":"Invalid request"}"#;
        assert_eq!(extract_error_message(body).as_deref(), Some("Invalid request"));
    }

    #[test]
    fn test_extract_plain_text_body() {
        let body = "A book with this title already exists\n";
        assert_eq!(
            extract_error_message(body).as_deref(),
            Some("A book with this title already exists")
        );
    }

    #[test]
    fn test_extract_empty_body() {
        assert_eq!(extract_error_message(""), None);
        assert_eq!(extract_error_message("  \n"), None);
    }

    #[test]
    fn test_json_without_known_field_falls_back_to_text() {
        let body = r#"{"code":42}"#;
        assert_eq!(extract_error_message(body).as_deref(), Some(r#"{"code":42}"#));
    }

    #[test]
    fn test_from_response_keeps_status() {
        let err = ApiError::from_response(404, "Book not found");
        assert_eq!(
            err,
            ApiError::Http {
                status: 404,
                message: Some("Book not found".to_string())
            }
        );
        assert_eq!(err.server_message(), Some("Book not found"));
        assert!(!err.is_unexpected());
    }

    #[test]
    fn test_validation_error_display() {
        let err: ApiError = ValidationError::PasswordMismatch.into();
        assert_eq!(err.to_string(), "Passwords do not match");
    }
}
