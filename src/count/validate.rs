//! Input validation and size limits.
//!
//! Checks run in a fixed order and the first failure wins:
//!
//! 1. type (only for loosely typed input, see [`TokenCounter::count_value`])
//! 2. blank text
//! 3. model support
//! 4. character / byte ceilings
//!
//! [`TokenCounter::count_value`]: super::TokenCounter::count_value

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Result, UtcError};
use crate::models::{encoding_for_model, Encoding};

/// Default ceiling on Unicode scalar values per request
pub const MAX_CHARS: usize = 100_000;

/// Default ceiling on UTF-8 bytes per request (512 KiB)
pub const MAX_BYTES: usize = 512 * 1024;

/// Static size caps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Limits {
    /// Maximum characters (Unicode scalar values)
    pub max_chars: usize,
    /// Maximum UTF-8 bytes
    pub max_bytes: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_chars: MAX_CHARS,
            max_bytes: MAX_BYTES,
        }
    }
}

impl Limits {
    /// Check measured sizes against both ceilings.
    ///
    /// The error detail names every ceiling that was exceeded.
    pub fn check(&self, char_count: usize, byte_size: usize) -> Result<()> {
        let chars_over = char_count > self.max_chars;
        let bytes_over = byte_size > self.max_bytes;

        let exceeded = match (chars_over, bytes_over) {
            (false, false) => return Ok(()),
            (true, false) => "character limit",
            (false, true) => "byte limit",
            (true, true) => "character and byte limits",
        };

        Err(UtcError::PayloadTooLarge(format!(
            "{exceeded} exceeded: {char_count} chars (max {}), {byte_size} bytes (max {})",
            self.max_chars, self.max_bytes
        )))
    }
}

/// Facts established by a successful validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Validated {
    /// Encoding resolved from the model
    pub encoding: Encoding,
    /// Unicode scalar values in the text
    pub char_count: usize,
    /// UTF-8 bytes in the text
    pub byte_size: usize,
}

/// Require both fields to be JSON strings.
pub fn check_types<'a>(model: &'a Value, text: &'a Value) -> Result<(&'a str, &'a str)> {
    match (model.as_str(), text.as_str()) {
        (Some(model), Some(text)) => Ok((model, text)),
        _ => Err(UtcError::InvalidType(format!(
            "'model' and 'text' must be strings (got {} and {})",
            json_type(model),
            json_type(text)
        ))),
    }
}

/// True when `text` has no characters other than whitespace.
///
/// The ASCII information separators (U+001C..=U+001F) count as whitespace
/// here, although `char::is_whitespace` does not treat them that way.
pub fn is_blank(text: &str) -> bool {
    text.chars()
        .all(|c| c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c))
}

/// Run checks 2-4 on typed input.
pub fn validate(model: &str, text: &str, limits: &Limits) -> Result<Validated> {
    if is_blank(text) {
        return Err(UtcError::EmptyText(
            "text is empty or contains only whitespace".to_string(),
        ));
    }

    let encoding = encoding_for_model(model)
        .ok_or_else(|| UtcError::UnsupportedModel(format!("model '{model}' is not supported")))?;

    let char_count = text.chars().count();
    let byte_size = text.len();
    limits.check(char_count, byte_size)?;

    Ok(Validated {
        encoding,
        char_count,
        byte_size,
    })
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use serde_json::json;

    fn code(result: Result<Validated>) -> Option<ErrorCode> {
        result.err().and_then(|e| e.code())
    }

    #[test]
    fn test_check_types() {
        assert!(check_types(&json!("gpt-4o"), &json!("hi")).is_ok());

        let err = check_types(&json!(4), &json!("hi")).unwrap_err();
        assert_eq!(err.code(), Some(ErrorCode::InvalidType));
        assert!(err.detail().contains("number"));

        let err = check_types(&json!("gpt-4o"), &Value::Null).unwrap_err();
        assert_eq!(err.code(), Some(ErrorCode::InvalidType));
        assert!(err.detail().contains("null"));
    }

    #[test]
    fn test_empty_before_model() {
        let limits = Limits::default();
        assert_eq!(code(validate("gpt-9x", "", &limits)), Some(ErrorCode::EmptyText));
        assert_eq!(code(validate("gpt-9x", " \n\t ", &limits)), Some(ErrorCode::EmptyText));
        // Unicode whitespace counts as blank too
        assert_eq!(code(validate("gpt-4o", "\u{3000}\u{00A0}", &limits)), Some(ErrorCode::EmptyText));
    }

    #[test]
    fn test_model_before_size() {
        let limits = Limits::default();
        let huge = "a".repeat(MAX_CHARS + 1);
        assert_eq!(
            code(validate("gpt-9x", &huge, &limits)),
            Some(ErrorCode::UnsupportedModel)
        );
    }

    #[test]
    fn test_char_limit() {
        let limits = Limits::default();
        let at_limit = "a".repeat(MAX_CHARS);
        assert!(validate("gpt-4o", &at_limit, &limits).is_ok());

        let over = "a".repeat(MAX_CHARS + 1);
        let err = validate("gpt-4o", &over, &limits).unwrap_err();
        assert_eq!(err.code(), Some(ErrorCode::PayloadTooLarge));
        assert!(err.detail().starts_with("character limit exceeded"));
    }

    #[test]
    fn test_byte_limit_with_few_chars() {
        // UTF-8 tops out at 4 bytes per char, so under the default caps the
        // char ceiling always trips first; a tighter byte cap isolates it.
        let limits = Limits {
            max_chars: MAX_CHARS,
            max_bytes: 1024,
        };
        let text = "😀".repeat(300);
        assert_eq!(text.len(), 1200);

        let err = validate("gpt-4o", &text, &limits).unwrap_err();
        assert_eq!(err.code(), Some(ErrorCode::PayloadTooLarge));
        assert!(err.detail().starts_with("byte limit exceeded"));
    }

    #[test]
    fn test_default_byte_cap_with_wide_chars() {
        let limits = Limits::default();
        let text = "😀".repeat(MAX_CHARS);
        assert!(validate("gpt-4o", &text, &limits).is_ok());

        let text = "😀".repeat(MAX_CHARS + 1);
        let err = validate("gpt-4o", &text, &limits).unwrap_err();
        assert_eq!(err.code(), Some(ErrorCode::PayloadTooLarge));
    }

    #[test]
    fn test_both_limits_reported() {
        let limits = Limits {
            max_chars: 5,
            max_bytes: 5,
        };
        let err = validate("gpt-4o", "abcdefgh", &limits).unwrap_err();
        assert!(err.detail().starts_with("character and byte limits exceeded"));
        assert!(err.detail().contains("8 chars"));
        assert!(err.detail().contains("8 bytes"));
    }

    #[test]
    fn test_valid_input() {
        let v = validate("gpt-4", "héllo", &Limits::default()).unwrap();
        assert_eq!(v.encoding, Encoding::Cl100kBase);
        assert_eq!(v.char_count, 5);
        assert_eq!(v.byte_size, 6);
    }

    #[test]
    fn test_information_separators_are_blank() {
        for text in ["\u{1c}", "\u{1f}\u{1e}", " \u{1d} ", "\t\u{1c}\n\u{85}\u{a0}"] {
            assert!(is_blank(text), "{text:?}");
            let err = validate("gpt-4o", text, &Limits::default()).unwrap_err();
            assert_eq!(err.code(), Some(ErrorCode::EmptyText));
        }

        assert!(!is_blank("\u{1c}a"));
        assert!(!is_blank("\u{1b}"));
        assert!(validate("gpt-4o", "\u{1d}x", &Limits::default()).is_ok());
    }
}
