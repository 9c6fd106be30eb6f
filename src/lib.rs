//! # UTC - Universal Token Counter
//!
//! Token counting for LLM inputs, exposed as a library, a CLI and an HTTP API.
//! Given a model name and a text, UTC returns the token count together with
//! derived statistics: tokens per character, tokens per byte (token density),
//! the detected language and timing.
//!
//! ## Pipeline
//!
//! ```text
//! (model, text)
//!      │
//!      ├─ type check ........... INVALID_TYPE
//!      ├─ blank text ........... EMPTY_TEXT
//!      ├─ model lookup ......... UNSUPPORTED_MODEL
//!      ├─ char / byte ceilings . PAYLOAD_TOO_LARGE
//!      │
//!      ├─ tokenize (tiktoken, encoding from the model table)
//!      ├─ token_per_char, token_density
//!      └─ language (best effort, "unknown" on failure)
//! ```
//!
//! The first failing check wins. The four domain errors are terminal for a
//! request and never retried.
//!
//! ## Quick Start
//!
//! ```
//! use utc::{ErrorCode, TokenCounter};
//!
//! let counter = TokenCounter::new();
//!
//! let response = counter.count("gpt-4o", "これはトークンカウンターのテストです。").unwrap();
//! assert_eq!(response.result.encoding.name(), "o200k_base");
//! assert_eq!(response.meta.model_family.as_str(), "openai");
//! assert!(response.result.token_count > 0);
//!
//! let err = counter.count("gpt-4o", "   ").unwrap_err();
//! assert_eq!(err.code(), Some(ErrorCode::EmptyText));
//! ```
//!
//! ## HTTP API
//!
//! | Method | Path                  | Purpose                 |
//! |--------|-----------------------|-------------------------|
//! | POST   | `/utc/v0/token-count` | Count tokens            |
//! | GET    | `/utc/v0/models`      | List supported models   |
//! | GET    | `/health`             | Liveness                |
//! | GET    | `/status`             | Uptime and limits       |
//!
//! Domain errors map to HTTP as follows:
//!
//! | Code                | Status |
//! |---------------------|--------|
//! | `INVALID_TYPE`      | 400    |
//! | `EMPTY_TEXT`        | 422    |
//! | `UNSUPPORTED_MODEL` | 400    |
//! | `PAYLOAD_TOO_LARGE` | 413    |
//!
//! ## Modules
//!
//! - [`count`]: Validation and counting pipeline
//! - [`models`]: Supported model table and encodings
//! - [`tokenizer`]: Tokenization capability (tiktoken)
//! - [`language`]: Best-effort language detection
//! - [`server`]: HTTP API server (Axum-based)
//! - [`config`]: Configuration management
//! - [`error`]: Error types and result aliases

pub mod config;
pub mod count;
pub mod error;
pub mod language;
pub mod models;
pub mod server;
pub mod tokenizer;

// Re-exports for convenience
pub use config::Config;
pub use count::{CountMeta, CountRequest, CountResponse, CountResult, Limits, TokenCounter};
pub use error::{ErrorCode, Result, UtcError};
pub use language::{LanguageDetector, ScriptDetector};
pub use models::{Encoding, ModelFamily};
pub use server::{AppState, ServerConfig};
pub use tokenizer::{Encoder, TiktokenEncoder};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Response format version reported in `meta.version`
pub const SPEC_VERSION: &str = "0.1.0";

/// Service name reported by health checks
pub const SERVICE_NAME: &str = "universal-token-counter";
