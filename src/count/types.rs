//! Request and response types for token counting.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Encoding, ModelFamily};

/// Token count request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountRequest {
    /// Target model name, e.g. "gpt-4o"
    pub model: String,
    /// Input text to be tokenized
    pub text: String,
}

impl CountRequest {
    /// Create a new request
    pub fn new(model: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            text: text.into(),
        }
    }
}

/// Counting result, derived entirely from the request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountResult {
    /// Model the text was counted for
    pub model: String,
    /// Encoding used
    pub encoding: Encoding,
    /// Unicode scalar values in the text
    pub char_count: usize,
    /// Tokens produced by the encoder
    pub token_count: usize,
    /// `token_count / char_count`
    pub token_per_char: f64,
}

/// Per-invocation metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountMeta {
    /// Detected language code, or "unknown"
    pub input_language: String,
    /// UTF-8 length of the text
    pub input_size_bytes: usize,
    /// Tokens per input byte
    pub token_density: f64,
    /// Model family
    pub model_family: ModelFamily,
    /// Elapsed time in milliseconds (monotonic clock)
    pub processing_time_ms: f64,
    /// Completion time, ISO-8601 UTC
    #[serde(rename = "utc_timestamp")]
    pub timestamp: String,
    /// Response format version
    #[serde(rename = "version")]
    pub spec_version: String,
}

/// Successful count: `{ "result": ..., "meta": ... }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountResponse {
    /// Counting result
    pub result: CountResult,
    /// Metadata
    pub meta: CountMeta,
}

/// Current UTC instant in ISO-8601 form (e.g. `2025-01-01T00:00:00.000000Z`)
pub fn utc_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// `numerator / denominator`, or 0.0 when the denominator is zero.
pub(crate) fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}
