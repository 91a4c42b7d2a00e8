// Error handling types for the API

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use std::fmt;
use tracing::error;

use super::validation::{ValidationError, ValidationResult};

/// API error types
#[derive(Debug)]
pub enum ApiError {
    MissingAuthHeader(String),
    Unauthorized(String),
    InvalidOrExpiredToken(String),
    PasswordMismatch(String),
    ValidationFailed(Vec<ValidationError>),
    UserNotFound(String),
    ResourceNotFound(String),
    InternalServer(String),
    DatabaseError(sqlx::Error),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::MissingAuthHeader(msg) => write!(f, "Missing Auth Header: {}", msg),
            ApiError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            ApiError::InvalidOrExpiredToken(msg) => {
                write!(f, "Invalid Or Expired Token: {}", msg)
            }
            ApiError::PasswordMismatch(msg) => write!(f, "Password Mismatch: {}", msg),
            ApiError::ValidationFailed(errors) => {
                let joined: Vec<String> = errors
                    .iter()
                    .map(|e| format!("{}: {}", e.field, e.message))
                    .collect();
                write!(f, "Validation Failed: {}", joined.join(", "))
            }
            ApiError::UserNotFound(msg) => write!(f, "User Not Found: {}", msg),
            ApiError::ResourceNotFound(msg) => write!(f, "Resource Not Found: {}", msg),
            ApiError::InternalServer(msg) => write!(f, "Internal Server Error: {}", msg),
            ApiError::DatabaseError(e) => write!(f, "Database Error: {}", e),
        }
    }
}

/// JSON error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<ValidationError>>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_message, code, fields) = match self {
            ApiError::MissingAuthHeader(msg) => {
                (StatusCode::UNAUTHORIZED, msg, "MISSING_AUTH_HEADER", None)
            }
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg, "UNAUTHORIZED", None),
            ApiError::InvalidOrExpiredToken(msg) => (
                StatusCode::BAD_REQUEST,
                msg,
                "INVALID_OR_EXPIRED_TOKEN",
                None,
            ),
            ApiError::PasswordMismatch(msg) => {
                (StatusCode::BAD_REQUEST, msg, "PASSWORD_MISMATCH", None)
            }
            ApiError::ValidationFailed(errors) => (
                StatusCode::BAD_REQUEST,
                "Validation failed".to_string(),
                "VALIDATION_FAILED",
                Some(errors),
            ),
            ApiError::UserNotFound(msg) => (StatusCode::NOT_FOUND, msg, "USER_NOT_FOUND", None),
            ApiError::ResourceNotFound(msg) => {
                (StatusCode::NOT_FOUND, msg, "RESOURCE_NOT_FOUND", None)
            }
            ApiError::InternalServer(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                msg,
                "INTERNAL_SERVER_ERROR",
                None,
            ),
            ApiError::DatabaseError(e) => {
                error!(error = %e, "Database error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Database operation failed".to_string(),
                    "DATABASE_ERROR",
                    None,
                )
            }
        };

        let error_response = ErrorResponse {
            error: error_message,
            code: code.to_string(),
            fields,
        };

        (status, Json(error_response)).into_response()
    }
}

impl From<ValidationResult> for ApiError {
    fn from(result: ValidationResult) -> Self {
        if result.is_valid {
            ApiError::InternalServer(
                "Validation result was valid but converted to error".to_string(),
            )
        } else {
            ApiError::ValidationFailed(result.errors)
        }
    }
}
