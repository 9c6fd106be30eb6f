//! Structured access logging.
//!
//! Every token-count request produces one flat JSON record on the
//! `utc::access` target. Building or writing a record never affects the
//! response: failures are reported on the `utc::logging` target and dropped.

use axum::http::HeaderMap;
use serde::Serialize;
use tracing::Level;

use super::response::INTERNAL_ERROR;
use crate::count::CountResponse;
use crate::error::UtcError;

/// Header carrying a caller-supplied request id
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Per-request identity for log correlation
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Caller-supplied or generated request id
    pub request_id: String,
    /// Request path
    pub endpoint: &'static str,
}

impl RequestContext {
    /// Take the request id from headers, or generate one
    pub fn from_headers(headers: &HeaderMap, endpoint: &'static str) -> Self {
        let request_id = headers
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map_or_else(|| uuid::Uuid::new_v4().to_string(), str::to_string);

        Self {
            request_id,
            endpoint,
        }
    }
}

/// One access log line
#[derive(Debug, Clone, Default, Serialize)]
pub struct AccessRecord<'a> {
    /// Event name
    pub event: &'a str,
    /// Request id
    pub request_id: &'a str,
    /// Request path
    pub endpoint: &'a str,
    /// "ok" or "error"
    pub status: &'a str,
    /// HTTP status code
    pub http_status: u16,
    /// Requested model
    pub model: Option<&'a str>,
    /// Characters in the input
    pub char_count: Option<usize>,
    /// UTF-8 bytes in the input
    pub input_size_bytes: Option<usize>,
    /// Tokens counted
    pub token_count: Option<usize>,
    /// Tokens per byte
    pub token_density: Option<f64>,
    /// Detected language
    pub input_language: Option<&'a str>,
    /// Handling time
    pub processing_time_ms: Option<f64>,
    /// Error code
    pub error_code: Option<&'a str>,
    /// Error message
    pub error_message: Option<String>,
}

/// Log a successful count
pub fn log_token_count_success(ctx: &RequestContext, response: &CountResponse) {
    let record = AccessRecord {
        event: "token_count_success",
        request_id: &ctx.request_id,
        endpoint: ctx.endpoint,
        status: "ok",
        http_status: 200,
        model: Some(&response.result.model),
        char_count: Some(response.result.char_count),
        input_size_bytes: Some(response.meta.input_size_bytes),
        token_count: Some(response.result.token_count),
        token_density: Some(response.meta.token_density),
        input_language: Some(&response.meta.input_language),
        processing_time_ms: Some(response.meta.processing_time_ms),
        ..AccessRecord::default()
    };
    emit(Level::INFO, &record);
}

/// Log a failed count.
///
/// Domain errors log at WARN; anything else is an unhandled error at ERROR.
pub fn log_token_count_error(
    ctx: &RequestContext,
    model: Option<&str>,
    error: &UtcError,
    http_status: u16,
    processing_time_ms: f64,
) {
    let (event, level, code) = match error.code() {
        Some(code) => ("token_count_error", Level::WARN, code.as_str()),
        None => ("unhandled_error", Level::ERROR, INTERNAL_ERROR),
    };

    let record = AccessRecord {
        event,
        request_id: &ctx.request_id,
        endpoint: ctx.endpoint,
        status: "error",
        http_status,
        model,
        processing_time_ms: Some(processing_time_ms),
        error_code: Some(code),
        error_message: Some(error.to_string()),
        ..AccessRecord::default()
    };
    emit(level, &record);
}

/// Serialize and write a record; never fails.
pub fn emit<T: Serialize>(level: Level, record: &T) {
    match serde_json::to_string(record) {
        Ok(line) => {
            if level == Level::ERROR {
                tracing::error!(target: "utc::access", "{line}");
            } else if level == Level::WARN {
                tracing::warn!(target: "utc::access", "{line}");
            } else if level == Level::INFO {
                tracing::info!(target: "utc::access", "{line}");
            } else {
                tracing::debug!(target: "utc::access", "{line}");
            }
        },
        Err(e) => log_logging_failure(&e),
    }
}

/// Report that a log record could not be produced
pub fn log_logging_failure(error: &dyn std::error::Error) {
    tracing::error!(target: "utc::logging", "logging_failure: {error}");
}
