//! Error types for prepmate-rig.

use std::fmt;

use crate::provider::Task;

/// Result type alias for rig operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during text generation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Provider error (API call failed, malformed response, etc.)
    #[error("provider error: {provider}: {message}")]
    Provider { provider: String, message: String },

    /// The provider rejected the call because of rate limiting.
    #[error("rate limited by {provider}, wait a moment and try again")]
    RateLimited { provider: String },

    /// The provider answered with no text.
    #[error("empty response for {task} task")]
    EmptyResponse { task: Task },

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Creates a provider error.
    pub fn provider(provider: impl fmt::Display, message: impl fmt::Display) -> Self {
        Self::Provider {
            provider: provider.to_string(),
            message: message.to_string(),
        }
    }

    /// Creates a rate limit error.
    pub fn rate_limited(provider: impl fmt::Display) -> Self {
        Self::RateLimited {
            provider: provider.to_string(),
        }
    }

    /// Creates an empty response error.
    pub fn empty_response(task: Task) -> Self {
        Self::EmptyResponse { task }
    }

    /// Creates a configuration error.
    pub fn config(message: impl fmt::Display) -> Self {
        Self::Config(message.to_string())
    }

    /// Returns true if this error is retryable.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Provider { .. } | Self::RateLimited { .. })
    }
}

impl From<prepmate_rag::Error> for Error {
    fn from(error: prepmate_rag::Error) -> Self {
        match error {
            prepmate_rag::Error::Config(message) => Self::Config(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable() {
        assert!(Error::provider("gemini", "timeout").is_retryable());
        assert!(Error::rate_limited("gemini").is_retryable());
        assert!(!Error::config("missing api key").is_retryable());
        assert!(!Error::empty_response(Task::Chat).is_retryable());
    }

    #[test]
    fn test_display() {
        let error = Error::empty_response(Task::Flashcards);
        assert_eq!(error.to_string(), "empty response for flashcards task");
    }
}
