//! Best-effort language detection.
//!
//! Detection is advisory: callers treat any error as "unknown" rather than
//! failing the request. [`ScriptDetector`] picks the dominant Unicode script
//! of the input and maps it to an ISO 639-1 code.

mod script;

pub use script::{Script, ScriptDetector};

use crate::error::Result;

/// Value reported when detection fails.
pub const UNKNOWN_LANGUAGE: &str = "unknown";

/// Detects the language of a text.
pub trait LanguageDetector: Send + Sync {
    /// Return a language code (e.g. `"ja"`), or an error when undecidable.
    fn detect(&self, text: &str) -> Result<String>;
}
