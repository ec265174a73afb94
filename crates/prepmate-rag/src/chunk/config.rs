//! Chunk geometry configuration.

use crate::{Error, Result};

/// Default chunk size in words.
pub const DEFAULT_CHUNK_SIZE: usize = 500;

/// Default overlap between consecutive chunks in words.
pub const DEFAULT_CHUNK_OVERLAP: usize = 50;

/// Validated chunk geometry.
///
/// Guarantees `chunk_size > overlap`, so the sliding-window step
/// `chunk_size - overlap` is always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkConfig {
    chunk_size: usize,
    overlap: usize,
}

impl ChunkConfig {
    /// Creates a chunk configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if `chunk_size` is zero or not greater than
    /// `overlap`.
    pub fn new(chunk_size: usize, overlap: usize) -> Result<Self> {
        if chunk_size == 0 {
            return Err(Error::config("chunk size must be greater than zero"));
        }

        if chunk_size <= overlap {
            return Err(Error::config(format!(
                "chunk size ({chunk_size}) must be greater than overlap ({overlap})"
            )));
        }

        Ok(Self {
            chunk_size,
            overlap,
        })
    }

    /// Returns the maximum words per chunk.
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Returns the number of words carried between chunks.
    pub fn overlap(&self) -> usize {
        self.overlap
    }

    /// Returns the sliding-window advance in words.
    pub fn step(&self) -> usize {
        self.chunk_size - self.overlap
    }
}

impl Default for ChunkConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            overlap: DEFAULT_CHUNK_OVERLAP,
        }
    }
}
