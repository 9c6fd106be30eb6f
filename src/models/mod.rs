//! Supported models and their tokenizer encodings.
//!
//! # Example
//!
//! ```
//! use utc::models::{encoding_for_model, Encoding, ModelFamily};
//!
//! let encoding = encoding_for_model("gpt-4o").unwrap();
//! assert_eq!(encoding, Encoding::O200kBase);
//! assert_eq!(encoding.name(), "o200k_base");
//! assert_eq!(ModelFamily::OpenAI.as_str(), "openai");
//! ```

mod card;
mod table;

pub use card::{Encoding, ModelFamily, ModelInfo};
pub use table::{encoding_for_model, family_for_model, is_supported, supported_models, MODEL_ENCODINGS};
