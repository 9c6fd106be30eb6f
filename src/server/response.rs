//! Error presentation: domain error codes to HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::count::utc_timestamp;
use crate::error::{ErrorCode, UtcError};

/// Code reported for failures outside the four domain kinds
pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";

/// HTTP status for a domain error code
pub fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidType | ErrorCode::UnsupportedModel => StatusCode::BAD_REQUEST,
        ErrorCode::EmptyText => StatusCode::UNPROCESSABLE_ENTITY,
        ErrorCode::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
    }
}

/// Human-readable message for a domain error code
pub fn message_for(code: ErrorCode) -> &'static str {
    match code {
        ErrorCode::InvalidType => "Invalid field type.",
        ErrorCode::EmptyText => "Input text is empty.",
        ErrorCode::UnsupportedModel => "Unsupported model.",
        ErrorCode::PayloadTooLarge => "Input size exceeds the limit.",
    }
}

/// What the caller should do about it
pub fn hint_for(code: ErrorCode) -> &'static str {
    match code {
        ErrorCode::InvalidType => "Check that 'model' and 'text' are strings.",
        ErrorCode::EmptyText => "Provide non-empty text (not only whitespace).",
        ErrorCode::UnsupportedModel => "Use a supported model name for this API (see /utc/v0/models).",
        ErrorCode::PayloadTooLarge => "Reduce the input size or split the request.",
    }
}

/// `error` block of an error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Stable error code
    pub code: String,
    /// Human-readable message
    pub message: String,
    /// Remediation hint
    pub hint: String,
    /// Specific detail (domain errors only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// `meta` block of an error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorMeta {
    /// Response format version
    pub version: String,
    /// Response time, ISO-8601 UTC
    pub utc_timestamp: String,
    /// Time spent handling the request
    pub processing_time_ms: f64,
}

/// Error response: `{ "error": ..., "meta": ... }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error block
    pub error: ErrorBody,
    /// Meta block
    pub meta: ErrorMeta,
}

/// A failed request, ready to render
#[derive(Debug)]
pub struct ApiError {
    error: UtcError,
    processing_time_ms: f64,
}

impl ApiError {
    /// Wrap an error with the time spent so far
    pub fn new(error: UtcError, processing_time_ms: f64) -> Self {
        Self {
            error,
            processing_time_ms,
        }
    }

    /// The wrapped error
    pub fn error(&self) -> &UtcError {
        &self.error
    }

    /// HTTP status this error renders with
    pub fn status(&self) -> StatusCode {
        self.error
            .code()
            .map_or(StatusCode::INTERNAL_SERVER_ERROR, status_for)
    }

    /// Response body
    pub fn body(&self) -> ErrorResponse {
        let error = match self.error.code() {
            Some(code) => ErrorBody {
                code: code.as_str().to_string(),
                message: message_for(code).to_string(),
                hint: hint_for(code).to_string(),
                detail: Some(self.error.detail()),
            },
            None => ErrorBody {
                code: INTERNAL_ERROR.to_string(),
                message: "Unhandled internal error.".to_string(),
                hint: "Retry later or contact the service operator.".to_string(),
                detail: None,
            },
        };

        ErrorResponse {
            error,
            meta: ErrorMeta {
                version: crate::SPEC_VERSION.to_string(),
                utc_timestamp: utc_timestamp(),
                processing_time_ms: self.processing_time_ms,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.body())).into_response()
    }
}
