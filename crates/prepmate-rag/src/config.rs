//! Chunking and retrieval configuration.

#[cfg(feature = "config")]
use clap::Args;
use serde::{Deserialize, Serialize};

use crate::chunk::{ChunkConfig, DEFAULT_CHUNK_OVERLAP, DEFAULT_CHUNK_SIZE};
use crate::rank::{DEFAULT_MAX_CHUNKS, RelevanceRanker};
use crate::{Error, Result, TextChunker};

/// Configuration for chunking documents and retrieving chunks per query.
///
/// Values are unchecked until [`RagConfig::validate`] or one of the
/// constructors below is called, so invalid geometry is rejected at load time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "config", derive(Args))]
pub struct RagConfig {
    /// Maximum words per chunk.
    #[cfg_attr(
        feature = "config",
        arg(long = "chunk-size", env = "CHUNK_SIZE", default_value_t = DEFAULT_CHUNK_SIZE)
    )]
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,

    /// Words carried from the end of one chunk into the next.
    #[cfg_attr(
        feature = "config",
        arg(long = "chunk-overlap", env = "CHUNK_OVERLAP", default_value_t = DEFAULT_CHUNK_OVERLAP)
    )]
    #[serde(default = "default_chunk_overlap")]
    pub chunk_overlap: usize,

    /// Maximum chunks retrieved per query.
    #[cfg_attr(
        feature = "config",
        arg(long = "max-chunks", env = "MAX_CHUNKS", default_value_t = DEFAULT_MAX_CHUNKS)
    )]
    #[serde(default = "default_max_chunks")]
    pub max_chunks: usize,
}

fn default_chunk_size() -> usize {
    DEFAULT_CHUNK_SIZE
}

fn default_chunk_overlap() -> usize {
    DEFAULT_CHUNK_OVERLAP
}

fn default_max_chunks() -> usize {
    DEFAULT_MAX_CHUNKS
}

impl Default for RagConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            chunk_overlap: DEFAULT_CHUNK_OVERLAP,
            max_chunks: DEFAULT_MAX_CHUNKS,
        }
    }
}

impl RagConfig {
    /// Validates all configuration values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the chunk geometry is invalid or
    /// `max_chunks` is zero.
    pub fn validate(&self) -> Result<()> {
        self.chunk_config()?;

        if self.max_chunks == 0 {
            return Err(Error::config("max chunks must be greater than zero"));
        }

        Ok(())
    }

    /// Returns the validated chunk geometry.
    pub fn chunk_config(&self) -> Result<ChunkConfig> {
        ChunkConfig::new(self.chunk_size, self.chunk_overlap)
    }

    /// Creates a chunker from this configuration.
    pub fn chunker(&self) -> Result<TextChunker> {
        Ok(TextChunker::new(self.chunk_config()?))
    }

    /// Creates a ranker from this configuration.
    pub fn ranker(&self) -> Result<RelevanceRanker> {
        self.validate()?;
        Ok(RelevanceRanker::new(self.max_chunks))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = RagConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.ranker().unwrap().max_chunks(), 3);
    }

    #[test]
    fn test_rejects_overlap_at_least_chunk_size() {
        let config = RagConfig {
            chunk_size: 50,
            chunk_overlap: 60,
            ..RagConfig::default()
        };
        assert!(config.validate().is_err());
        assert!(config.chunker().is_err());
    }

    #[test]
    fn test_rejects_zero_max_chunks() {
        let config = RagConfig {
            max_chunks: 0,
            ..RagConfig::default()
        };
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_deserialize_fills_defaults() {
        let config: RagConfig = serde_json::from_str(r#"{"chunk_size": 200}"#).unwrap();
        assert_eq!(config.chunk_size, 200);
        assert_eq!(config.chunk_overlap, DEFAULT_CHUNK_OVERLAP);
        assert_eq!(config.max_chunks, DEFAULT_MAX_CHUNKS);
    }
}
