//! Error types for prepmate-rag.

use std::fmt;

/// Result type alias for chunking and retrieval configuration.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by prepmate-rag.
///
/// Chunking and ranking themselves never fail; the only error is a rejected
/// configuration, raised before any text is processed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Creates a configuration error.
    pub fn config(message: impl fmt::Display) -> Self {
        Self::Config(message.to_string())
    }
}
