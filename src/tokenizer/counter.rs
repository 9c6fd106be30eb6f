//! tiktoken-backed encoder.
//!
//! Uses tiktoken-rs for BPE tokenization with lazy-loaded vocabularies.

use std::sync::OnceLock;

use tiktoken_rs::{cl100k_base, o200k_base, p50k_base, r50k_base, CoreBPE};

use crate::error::{Result, UtcError};
use crate::models::Encoding;

type Loaded = std::result::Result<CoreBPE, String>;

// Lazy-loaded tokenizer instances (thread-safe singletons)
static O200K: OnceLock<Loaded> = OnceLock::new();
static CL100K: OnceLock<Loaded> = OnceLock::new();
static P50K: OnceLock<Loaded> = OnceLock::new();
static R50K: OnceLock<Loaded> = OnceLock::new();

fn load(encoding: Encoding) -> Loaded {
    let loaded = match encoding {
        Encoding::O200kBase => o200k_base(),
        Encoding::Cl100kBase => cl100k_base(),
        Encoding::P50kBase => p50k_base(),
        Encoding::R50kBase => r50k_base(),
    };
    loaded.map_err(|e| e.to_string())
}

/// Get the BPE for an encoding, loading it on first use.
///
/// A load failure is remembered; every later call reports the same error.
fn bpe(encoding: Encoding) -> Result<&'static CoreBPE> {
    let cell = match encoding {
        Encoding::O200kBase => &O200K,
        Encoding::Cl100kBase => &CL100K,
        Encoding::P50kBase => &P50K,
        Encoding::R50kBase => &R50K,
    };

    cell.get_or_init(|| {
        let loaded = load(encoding);
        match &loaded {
            Ok(_) => tracing::debug!("Loaded {} tokenizer", encoding),
            Err(e) => tracing::error!("Failed to load {} tokenizer: {}", encoding, e),
        }
        loaded
    })
    .as_ref()
    .map_err(|e| UtcError::Tokenizer(format!("failed to load {encoding}: {e}")))
}

/// Turns text into token ids for a given encoding.
///
/// Implementations must be deterministic for a given `(encoding, text)` pair.
pub trait Encoder: Send + Sync {
    /// Encode `text` with `encoding`.
    fn encode(&self, encoding: Encoding, text: &str) -> Result<Vec<u32>>;

    /// Number of tokens in `text`.
    fn count(&self, encoding: Encoding, text: &str) -> Result<usize> {
        self.encode(encoding, text).map(|tokens| tokens.len())
    }
}

/// Encoder over the tiktoken vocabularies.
///
/// # Example
/// ```
/// use utc::tokenizer::{Encoder, TiktokenEncoder};
/// use utc::models::Encoding;
///
/// let encoder = TiktokenEncoder::new();
/// let tokens = encoder.count(Encoding::O200kBase, "Hello, world!").unwrap();
/// assert!(tokens > 0);
/// assert!(tokens < 10);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TiktokenEncoder;

impl TiktokenEncoder {
    /// Create a new encoder
    pub fn new() -> Self {
        Self
    }

    /// Load every vocabulary up front so the first request does not pay for it.
    pub fn preload(&self) -> Result<()> {
        for encoding in Encoding::ALL {
            bpe(encoding)?;
        }
        Ok(())
    }
}

impl Encoder for TiktokenEncoder {
    fn encode(&self, encoding: Encoding, text: &str) -> Result<Vec<u32>> {
        Ok(bpe(encoding)?.encode_with_special_tokens(text))
    }
}
