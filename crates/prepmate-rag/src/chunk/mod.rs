//! Text chunking for document retrieval.
//!
//! Splits extracted document text into ordered chunks sized by word count,
//! carrying a configurable number of trailing words from one chunk into the
//! next so that sentences straddling a boundary remain findable.

mod chunker;
mod config;

use serde::{Deserialize, Serialize};

pub use self::chunker::{TextChunker, chunk_text};
pub use self::config::{ChunkConfig, DEFAULT_CHUNK_OVERLAP, DEFAULT_CHUNK_SIZE};

/// A contiguous, bounded span of document text prepared for retrieval.
///
/// The serialized shape (`content`, `chunkIndex`, `pageNumber`) is the
/// persisted record shared between the chunker and the ranker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chunk {
    /// Whitespace-normalized chunk text, never empty.
    pub content: String,

    /// Zero-based position of the chunk within its document.
    pub chunk_index: u32,

    /// Source page, `0` when page tracking is unavailable.
    #[serde(default)]
    pub page_number: u32,
}

impl Chunk {
    /// Creates a chunk without page provenance.
    pub fn new(content: impl Into<String>, chunk_index: u32) -> Self {
        Self {
            content: content.into(),
            chunk_index,
            page_number: 0,
        }
    }

    /// Sets the page number.
    pub fn with_page(mut self, page_number: u32) -> Self {
        self.page_number = page_number;
        self
    }

    /// Returns the number of whitespace-separated words in the chunk.
    pub fn word_count(&self) -> usize {
        self.content.split_whitespace().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_serializes_camel_case() {
        let chunk = Chunk::new("cells divide", 4).with_page(2);
        let json = serde_json::to_value(&chunk).unwrap();

        assert_eq!(json["content"], "cells divide");
        assert_eq!(json["chunkIndex"], 4);
        assert_eq!(json["pageNumber"], 2);
    }

    #[test]
    fn test_chunk_page_defaults_to_zero() {
        let chunk: Chunk =
            serde_json::from_str(r#"{"content":"mitosis","chunkIndex":0}"#).unwrap();
        assert_eq!(chunk.page_number, 0);
        assert_eq!(chunk.word_count(), 1);
    }
}
