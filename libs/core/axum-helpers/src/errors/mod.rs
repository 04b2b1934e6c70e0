pub mod codes;
pub mod handlers;
pub mod responses;

pub use codes::ErrorCode;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;
use validator::ValidationErrors;

/// Standard error response structure.
///
/// Returned for every error response:
/// - `code`: integer error code for logging/monitoring (e.g., 1008)
/// - `error`: machine-readable identifier (e.g., "CONFLICT")
/// - `message`: human-readable message
/// - `details`: optional structured details (e.g., validation field errors)
///
/// ```json
/// {
///   "code": 1008,
///   "error": "CONFLICT",
///   "message": "Email jane@uni.edu is already registered"
/// }
/// ```
#[derive(Debug, Serialize, serde::Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Integer error code for logging and monitoring
    pub code: i32,
    /// Machine-readable error identifier for programmatic handling
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Optional structured error details (e.g., validation field errors)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Application error type that can be converted to HTTP responses.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationErrors),

    #[error("Invalid identifier: {0}")]
    InvalidId(String),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match self {
            AppError::JsonExtractorRejection(e) => map_json_rejection(&e),
            AppError::ValidationError(e) => {
                tracing::info!(error_code = ErrorCode::ValidationError.code(), errors = %e, "Validation error");
                let message = validation_message(&e);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorCode::ValidationError,
                    message,
                    Some(serde_json::to_value(&e).unwrap_or(serde_json::Value::Null)),
                )
            }
            AppError::InvalidId(raw) => {
                tracing::info!(error_code = ErrorCode::InvalidId.code(), raw = %raw, "Invalid path identifier");
                (
                    StatusCode::BAD_REQUEST,
                    ErrorCode::InvalidId,
                    format!("Invalid id '{raw}': {}", ErrorCode::InvalidId.default_message()),
                    None,
                )
            }
            AppError::BadRequest(msg) => {
                tracing::info!(error_code = ErrorCode::BadRequest.code(), "Bad request: {}", msg);
                (StatusCode::BAD_REQUEST, ErrorCode::BadRequest, msg, None)
            }
            AppError::NotFound(msg) => {
                tracing::info!(error_code = ErrorCode::NotFound.code(), "Not found: {}", msg);
                (StatusCode::NOT_FOUND, ErrorCode::NotFound, msg, None)
            }
            AppError::Conflict(msg) => {
                tracing::info!(error_code = ErrorCode::Conflict.code(), "Conflict: {}", msg);
                (StatusCode::CONFLICT, ErrorCode::Conflict, msg, None)
            }
            AppError::InternalServerError(msg) => {
                // Logged in full, never echoed back to the client
                tracing::error!(error_code = ErrorCode::InternalError.code(), "Internal server error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::InternalError,
                    ErrorCode::InternalError.default_message().to_string(),
                    None,
                )
            }
        };

        error_response_with_details(status, code, message, details)
    }
}

/// Summarize validation failures as "Request validation failed: field_a, field_b".
fn validation_message(errors: &ValidationErrors) -> String {
    let mut fields: Vec<&str> = errors.errors().keys().map(|k| k.as_ref()).collect();
    fields.sort_unstable();
    if fields.is_empty() {
        ErrorCode::ValidationError.default_message().to_string()
    } else {
        format!(
            "{}: {}",
            ErrorCode::ValidationError.default_message(),
            fields.join(", ")
        )
    }
}

/// Maps JSON body rejections. Type mismatches and missing fields are
/// reported as validation errors; axum's message names the offending field.
fn map_json_rejection(
    rejection: &JsonRejection,
) -> (StatusCode, ErrorCode, String, Option<serde_json::Value>) {
    match rejection {
        JsonRejection::JsonDataError(e) => {
            tracing::info!(error_code = ErrorCode::ValidationError.code(), error = %e.body_text(), "JSON data error");
            (
                StatusCode::BAD_REQUEST,
                ErrorCode::ValidationError,
                e.body_text(),
                None,
            )
        }
        JsonRejection::JsonSyntaxError(e) => {
            tracing::info!(error_code = ErrorCode::InvalidJson.code(), error = %e.body_text(), "JSON syntax error");
            (
                StatusCode::BAD_REQUEST,
                ErrorCode::InvalidJson,
                e.body_text(),
                None,
            )
        }
        other => {
            tracing::warn!(error_code = ErrorCode::JsonExtraction.code(), error = %other.body_text(), "JSON extraction error");
            (
                other.status(),
                ErrorCode::JsonExtraction,
                other.body_text(),
                None,
            )
        }
    }
}

/// Build an error response without details.
///
/// ```rust,ignore
/// use axum_helpers::errors::{error_response, ErrorCode};
/// use axum::http::StatusCode;
///
/// let response = error_response(StatusCode::BAD_REQUEST, "Invalid input".into(), ErrorCode::BadRequest);
/// ```
pub fn error_response(status: StatusCode, message: String, error_code: ErrorCode) -> Response {
    error_response_with_details(status, error_code, message, None)
}

fn error_response_with_details(
    status: StatusCode,
    error_code: ErrorCode,
    message: String,
    details: Option<serde_json::Value>,
) -> Response {
    let body = Json(ErrorResponse {
        code: error_code.code(),
        error: error_code.as_str().to_string(),
        message,
        details,
    });

    (status, body).into_response()
}
