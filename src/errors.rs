use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::fmt;

/// Request-level errors.
///
/// Malformed fields inside an otherwise valid receipt are not errors; they
/// only lower the score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// The route exists but not for this HTTP method.
    MethodNotAllowed(String),
    /// Body could not be read or decoded.
    BadRequest(String),
    /// Unknown receipt id or route.
    NotFound(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    /// Message sent to the client.
    pub fn message(&self) -> &str {
        match self {
            AppError::MethodNotAllowed(msg) | AppError::BadRequest(msg) | AppError::NotFound(msg) => {
                msg
            }
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::MethodNotAllowed(msg) => write!(f, "Method not allowed: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    /// Maps each variant to its status code with a plain-text body.
    fn into_response(self) -> Response {
        match &self {
            AppError::BadRequest(msg) => tracing::warn!("Rejected request: {}", msg),
            AppError::MethodNotAllowed(_) | AppError::NotFound(_) => tracing::debug!("{}", self),
        }

        (self.status_code(), self.message().to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use axum::http::header::CONTENT_TYPE;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::MethodNotAllowed("x".into()).status_code(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(
            AppError::BadRequest("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::NotFound("x".into()).status_code(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_display_includes_kind() {
        let err = AppError::NotFound("Receipt not found".into());
        assert_eq!(err.to_string(), "Not found: Receipt not found");
        assert_eq!(err.message(), "Receipt not found");
    }

    #[tokio::test]
    async fn test_response_is_plain_text() {
        let response = AppError::BadRequest("Invalid JSON data".into()).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let content_type = response.headers()[CONTENT_TYPE].to_str().unwrap().to_string();
        assert!(content_type.starts_with("text/plain"));

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"Invalid JSON data");
    }
}
