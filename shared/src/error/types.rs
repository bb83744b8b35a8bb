//! Error types and API response structures

use super::category::ErrorCategory;
use super::codes::ErrorCode;
use http::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Application error with structured error code
///
/// This is the error type every HTTP handler returns.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
}

impl AppError {
    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }

    // ==================== Convenience constructors ====================

    /// Malformed path identifier, rendered as `No record with given id : {id}`
    pub fn invalid_id(id: impl AsRef<str>) -> Self {
        Self::with_message(
            ErrorCode::EmployeeIdInvalid,
            format!("{} : {}", ErrorCode::EmployeeIdInvalid.message(), id.as_ref()),
        )
    }

    /// Create a database error
    ///
    /// The detail message is logged server-side only; clients see the
    /// generic "Database error" text.
    pub fn database(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::DatabaseError, msg)
    }
}

/// JSON body of every non plain-text error response
///
/// Decoded again on the client side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
}

impl ApiResponse {
    /// Create an error response from an AppError
    ///
    /// System errors never leak their internal message.
    pub fn error(err: &AppError) -> Self {
        let message = match err.code.category() {
            ErrorCategory::System => err.code.message().to_string(),
            ErrorCategory::Employee => err.message.clone(),
        };
        Self {
            code: err.code,
            message,
        }
    }
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

// ===== Axum Integration =====

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;

        let status = self.http_status();

        if self.code.category() == ErrorCategory::System {
            tracing::error!(
                target: "database",
                code = %self.code,
                message = %self.message,
                "System error occurred"
            );
        }

        if self.code.is_plain_text() {
            return (status, self.message).into_response();
        }

        let body = ApiResponse::error(&self);
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::response::IntoResponse;

    fn content_type(response: &axum::response::Response) -> &str {
        response
            .headers()
            .get(http::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
    }

    #[test]
    fn test_invalid_id_message_names_the_id() {
        let err = AppError::invalid_id("not-an-id");
        assert_eq!(err.code, ErrorCode::EmployeeIdInvalid);
        assert_eq!(err.message, "No record with given id : not-an-id");
        assert_eq!(err.http_status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_database_error_hides_detail_in_body() {
        let err = AppError::database("connection reset by peer");
        let body = ApiResponse::error(&err);
        assert_eq!(body.code, ErrorCode::DatabaseError);
        assert_eq!(body.message, "Database error");
    }

    #[test]
    fn test_invalid_id_renders_plain_text() {
        let response = AppError::invalid_id("abc").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(content_type(&response).starts_with("text/plain"));
    }

    #[test]
    fn test_database_error_renders_json() {
        let response = AppError::database("boom").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(content_type(&response), "application/json");
    }

    #[test]
    fn test_api_response_wire_format() {
        let body = ApiResponse::error(&AppError::database("boom"));
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"code":9002,"message":"Database error"}"#
        );

        let back: ApiResponse = serde_json::from_str(r#"{"code":9002,"message":"x"}"#).unwrap();
        assert_eq!(back.code, ErrorCode::DatabaseError);
    }
}
