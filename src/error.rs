//! UTC error types.
//!
//! # Error Classification
//!
//! Errors fall into two groups:
//!
//! - **Domain errors**: the request itself is malformed (`InvalidType`,
//!   `EmptyText`, `UnsupportedModel`, `PayloadTooLarge`). They carry a stable
//!   [`ErrorCode`] that transport layers key on, and are never retried.
//! - **Internal errors**: anything else (tokenizer vocabulary failed to load,
//!   bad configuration, I/O). They have no [`ErrorCode`] and surface to HTTP
//!   callers as a generic internal failure.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stable codes for the four domain error kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// `model` or `text` is not a string.
    InvalidType,
    /// `text` is empty or whitespace-only.
    EmptyText,
    /// `model` is not in the supported model table.
    UnsupportedModel,
    /// Character or byte ceiling exceeded.
    PayloadTooLarge,
}

impl ErrorCode {
    /// All codes, in validation order.
    pub const ALL: [ErrorCode; 4] = [
        ErrorCode::InvalidType,
        ErrorCode::EmptyText,
        ErrorCode::UnsupportedModel,
        ErrorCode::PayloadTooLarge,
    ];

    /// Wire representation (e.g. `"EMPTY_TEXT"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidType => "INVALID_TYPE",
            ErrorCode::EmptyText => "EMPTY_TEXT",
            ErrorCode::UnsupportedModel => "UNSUPPORTED_MODEL",
            ErrorCode::PayloadTooLarge => "PAYLOAD_TOO_LARGE",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// UTC errors.
#[derive(Error, Debug)]
pub enum UtcError {
    /// `model` or `text` was not a string.
    #[error("Invalid type: {0}")]
    InvalidType(String),

    /// Text is empty or only whitespace.
    #[error("Empty text: {0}")]
    EmptyText(String),

    /// Model is not in the model-to-encoding table.
    #[error("Unsupported model: {0}")]
    UnsupportedModel(String),

    /// Input exceeds the character and/or byte ceiling.
    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    /// Tokenizer error (vocabulary failed to load, etc.).
    #[error("Tokenizer error: {0}")]
    Tokenizer(String),

    /// Language could not be detected.
    #[error("Language detection error: {0}")]
    LanguageDetection(String),

    /// Configuration error.
    #[error("Config error: {0}")]
    Config(String),

    /// Server-side error.
    #[error("Server error: {0}")]
    Server(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for UTC operations
pub type Result<T> = std::result::Result<T, UtcError>;

impl UtcError {
    /// Domain error code, or `None` for internal errors.
    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            UtcError::InvalidType(_) => Some(ErrorCode::InvalidType),
            UtcError::EmptyText(_) => Some(ErrorCode::EmptyText),
            UtcError::UnsupportedModel(_) => Some(ErrorCode::UnsupportedModel),
            UtcError::PayloadTooLarge(_) => Some(ErrorCode::PayloadTooLarge),
            _ => None,
        }
    }

    /// Whether this is one of the four domain errors.
    pub fn is_domain(&self) -> bool {
        self.code().is_some()
    }

    /// Detail string without the variant prefix.
    pub fn detail(&self) -> String {
        match self {
            UtcError::InvalidType(d)
            | UtcError::EmptyText(d)
            | UtcError::UnsupportedModel(d)
            | UtcError::PayloadTooLarge(d)
            | UtcError::Tokenizer(d)
            | UtcError::LanguageDetection(d)
            | UtcError::Config(d)
            | UtcError::Server(d) => d.clone(),
            UtcError::Json(e) => e.to_string(),
            UtcError::Io(e) => e.to_string(),
        }
    }
}

impl From<toml::de::Error> for UtcError {
    fn from(err: toml::de::Error) -> Self {
        UtcError::Config(err.to_string())
    }
}
