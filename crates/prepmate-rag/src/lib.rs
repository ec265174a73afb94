#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

pub mod chunk;
mod config;
mod error;
pub mod rank;

pub use chunk::{Chunk, ChunkConfig, TextChunker, chunk_text};
pub use config::RagConfig;
pub use error::{Error, Result};
pub use rank::{RankedChunk, RelevanceRanker, ScoredChunk, find_relevant_chunks};

/// Tracing target for chunking operations.
pub const TRACING_TARGET_CHUNK: &str = "prepmate_rag::chunk";

/// Tracing target for ranking operations.
pub const TRACING_TARGET_RANK: &str = "prepmate_rag::rank";
