//! Error type for the tokenizer core.
//!
//! The pipeline itself is total: no input text produces a failure. The only
//! error surface is configuration, reported before tokenization starts.

use thiserror::Error;

/// Error type for tokenizer operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    /// Malformed abbreviation configuration
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias for tokenizer operations.
pub type Result<T> = std::result::Result<T, Error>;
