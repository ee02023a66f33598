//! Error types for tagged_corpus.

use thiserror::Error;

/// Errors raised while turning untyped data into a corpus.
#[derive(Debug, Error)]
pub enum CorpusError {
    /// The data is not an array of sentences of (word, tag) pairs.
    #[error("malformed corpus shape: {0}")]
    Shape(#[from] serde_json::Error),

    /// I/O error wrapper.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for corpus decoding.
pub type Result<T> = std::result::Result<T, CorpusError>;
