//! Model metadata types.
//!
//! - `Encoding`: tiktoken vocabulary used by a model
//! - `ModelFamily`: vendor family reported in response metadata
//! - `ModelInfo`: one row of the supported-model table

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UtcError;

/// Tokenizer encoding type
///
/// Every supported model maps to exactly one of these BPE vocabularies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Encoding {
    /// o200k_base (GPT-4o, GPT-4.1, o1, o3, o4)
    O200kBase,
    /// cl100k_base (GPT-4, GPT-3.5, text-embedding-3)
    Cl100kBase,
    /// p50k_base (text-davinci-002/003, code-davinci)
    P50kBase,
    /// r50k_base (GPT-3 base models)
    R50kBase,
}

impl Encoding {
    /// All encodings
    pub const ALL: [Encoding; 4] = [
        Encoding::O200kBase,
        Encoding::Cl100kBase,
        Encoding::P50kBase,
        Encoding::R50kBase,
    ];

    /// Get encoding name as string
    pub fn name(&self) -> &'static str {
        match self {
            Encoding::O200kBase => "o200k_base",
            Encoding::Cl100kBase => "cl100k_base",
            Encoding::P50kBase => "p50k_base",
            Encoding::R50kBase => "r50k_base",
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Encoding {
    type Err = UtcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Encoding::ALL
            .into_iter()
            .find(|e| e.name() == s)
            .ok_or_else(|| UtcError::Tokenizer(format!("unknown encoding '{s}'")))
    }
}

/// Model family reported in `meta.model_family`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ModelFamily {
    /// OpenAI models, tokenized via tiktoken
    #[default]
    OpenAI,
}

impl ModelFamily {
    /// Wire name (e.g. `"openai"`)
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelFamily::OpenAI => "openai",
        }
    }
}

impl fmt::Display for ModelFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A supported model and how it is tokenized
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelInfo {
    /// Model identifier as accepted by the API (e.g. "gpt-4o")
    pub model: String,
    /// Tokenizer encoding
    pub encoding: Encoding,
    /// Model family
    pub family: ModelFamily,
}
