//! Token counting pipeline.
//!
//! [`TokenCounter`] validates `(model, text)`, tokenizes the text with the
//! model's encoding, and derives per-character and per-byte statistics.
//!
//! # Example
//!
//! ```
//! use utc::count::TokenCounter;
//! use utc::ErrorCode;
//!
//! let counter = TokenCounter::new();
//!
//! let response = counter.count("gpt-4o", "Hello, world!").unwrap();
//! assert_eq!(response.result.encoding.name(), "o200k_base");
//! assert!(response.result.token_count > 0);
//!
//! let err = counter.count("gpt-9x", "test").unwrap_err();
//! assert_eq!(err.code(), Some(ErrorCode::UnsupportedModel));
//! ```

mod types;
mod validate;

pub use types::{utc_timestamp, CountMeta, CountRequest, CountResponse, CountResult};
pub use validate::{check_types, is_blank, validate, Limits, Validated, MAX_BYTES, MAX_CHARS};

use std::time::Instant;

use serde_json::Value;

use crate::error::Result;
use crate::language::{LanguageDetector, ScriptDetector, UNKNOWN_LANGUAGE};
use crate::models::family_for_model;
use crate::tokenizer::{Encoder, TiktokenEncoder};
use types::ratio;

/// Validates input and counts tokens.
///
/// Holds no mutable state; share one instance across threads.
#[derive(Debug, Clone)]
pub struct TokenCounter<E = TiktokenEncoder, D = ScriptDetector> {
    encoder: E,
    detector: D,
    limits: Limits,
}

impl TokenCounter {
    /// Counter backed by tiktoken and the script detector, with default limits.
    pub fn new() -> Self {
        Self::with_parts(TiktokenEncoder::new(), ScriptDetector::new())
    }
}

impl Default for TokenCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Encoder, D: LanguageDetector> TokenCounter<E, D> {
    /// Counter over a custom encoder and detector.
    pub fn with_parts(encoder: E, detector: D) -> Self {
        Self {
            encoder,
            detector,
            limits: Limits::default(),
        }
    }

    /// Replace the size limits.
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Active size limits.
    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Count tokens for typed input.
    pub fn count(&self, model: &str, text: &str) -> Result<CountResponse> {
        self.run(model, text, Instant::now())
    }

    /// Count tokens for a [`CountRequest`].
    pub fn count_request(&self, request: &CountRequest) -> Result<CountResponse> {
        self.count(&request.model, &request.text)
    }

    /// Count tokens for loosely typed input, rejecting non-strings with
    /// `INVALID_TYPE` before any other check.
    pub fn count_value(&self, model: &Value, text: &Value) -> Result<CountResponse> {
        let started = Instant::now();
        let (model, text) = check_types(model, text)?;
        self.run(model, text, started)
    }

    fn run(&self, model: &str, text: &str, started: Instant) -> Result<CountResponse> {
        let checked = validate(model, text, &self.limits)?;

        let token_count = self.encoder.count(checked.encoding, text)?;
        // char_count is never 0 here (blank text is rejected), ratio() still guards it
        let token_per_char = ratio(token_count, checked.char_count);
        let token_density = ratio(token_count, checked.byte_size);

        let input_language = match self.detector.detect(text) {
            Ok(lang) if !lang.is_empty() => lang,
            Ok(_) => UNKNOWN_LANGUAGE.to_string(),
            Err(e) => {
                tracing::debug!("Language detection failed, using '{UNKNOWN_LANGUAGE}': {e}");
                UNKNOWN_LANGUAGE.to_string()
            },
        };

        let processing_time_ms = started.elapsed().as_secs_f64() * 1000.0;

        tracing::debug!(
            model,
            encoding = %checked.encoding,
            char_count = checked.char_count,
            token_count,
            "Counted tokens"
        );

        Ok(CountResponse {
            result: CountResult {
                model: model.to_string(),
                encoding: checked.encoding,
                char_count: checked.char_count,
                token_count,
                token_per_char,
            },
            meta: CountMeta {
                input_language,
                input_size_bytes: checked.byte_size,
                token_density,
                model_family: family_for_model(model),
                processing_time_ms,
                timestamp: utc_timestamp(),
                spec_version: crate::SPEC_VERSION.to_string(),
            },
        })
    }
}
