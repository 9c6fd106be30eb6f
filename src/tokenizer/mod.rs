//! Tokenization capability.
//!
//! The counter treats tokenization as an opaque capability: an [`Encoder`]
//! turns `(encoding, text)` into token ids. [`TiktokenEncoder`] is the
//! production implementation.
//!
//! # Supported Encodings
//!
//! - **o200k_base**: GPT-4o, GPT-4.1, o1, o3, o4 models
//! - **cl100k_base**: GPT-3.5, GPT-4, text-embedding-3
//! - **p50k_base**: text-davinci-002/003, code-davinci-002
//! - **r50k_base**: GPT-3 base models

mod counter;

pub use counter::{Encoder, TiktokenEncoder};
