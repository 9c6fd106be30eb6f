//! Supported model table.
//!
//! Compile-time map from model identifier to tiktoken encoding. A model is
//! supported if and only if it is a key here.

use phf::phf_map;

use super::card::{Encoding, ModelFamily, ModelInfo};

/// Model identifier → encoding
pub static MODEL_ENCODINGS: phf::Map<&'static str, Encoding> = phf_map! {
    // GPT-4o / GPT-4.1 family
    "gpt-4o" => Encoding::O200kBase,
    "gpt-4o-mini" => Encoding::O200kBase,
    "gpt-4o-2024-05-13" => Encoding::O200kBase,
    "gpt-4o-2024-08-06" => Encoding::O200kBase,
    "gpt-4o-2024-11-20" => Encoding::O200kBase,
    "chatgpt-4o-latest" => Encoding::O200kBase,
    "gpt-4.1" => Encoding::O200kBase,
    "gpt-4.1-mini" => Encoding::O200kBase,
    "gpt-4.1-nano" => Encoding::O200kBase,
    // Reasoning models
    "o1" => Encoding::O200kBase,
    "o1-mini" => Encoding::O200kBase,
    "o1-preview" => Encoding::O200kBase,
    "o3" => Encoding::O200kBase,
    "o3-mini" => Encoding::O200kBase,
    "o4-mini" => Encoding::O200kBase,
    // GPT-4 / GPT-3.5 family
    "gpt-4" => Encoding::Cl100kBase,
    "gpt-4-32k" => Encoding::Cl100kBase,
    "gpt-4-turbo" => Encoding::Cl100kBase,
    "gpt-4-turbo-preview" => Encoding::Cl100kBase,
    "gpt-3.5-turbo" => Encoding::Cl100kBase,
    "gpt-3.5-turbo-16k" => Encoding::Cl100kBase,
    // Embeddings
    "text-embedding-3-small" => Encoding::Cl100kBase,
    "text-embedding-3-large" => Encoding::Cl100kBase,
    "text-embedding-ada-002" => Encoding::Cl100kBase,
    // Legacy completions
    "text-davinci-003" => Encoding::P50kBase,
    "text-davinci-002" => Encoding::P50kBase,
    "code-davinci-002" => Encoding::P50kBase,
    "davinci" => Encoding::R50kBase,
    "curie" => Encoding::R50kBase,
    "babbage" => Encoding::R50kBase,
    "ada" => Encoding::R50kBase,
};

/// Look up the encoding for a model
///
/// # Example
/// ```
/// use utc::models::{encoding_for_model, Encoding};
///
/// assert_eq!(encoding_for_model("gpt-4o"), Some(Encoding::O200kBase));
/// assert_eq!(encoding_for_model("gpt-9x"), None);
/// ```
pub fn encoding_for_model(model: &str) -> Option<Encoding> {
    MODEL_ENCODINGS.get(model).copied()
}

/// Whether a model is in the supported table
pub fn is_supported(model: &str) -> bool {
    MODEL_ENCODINGS.contains_key(model)
}

/// Family for a supported model
pub fn family_for_model(_model: &str) -> ModelFamily {
    ModelFamily::OpenAI
}

/// All supported models, sorted by identifier
pub fn supported_models() -> Vec<ModelInfo> {
    let mut models: Vec<ModelInfo> = MODEL_ENCODINGS
        .entries()
        .map(|(model, encoding)| ModelInfo {
            model: (*model).to_string(),
            encoding: *encoding,
            family: family_for_model(model),
        })
        .collect();
    models.sort_by(|a, b| a.model.cmp(&b.model));
    models
}
