//! Ranking result types.

use serde::{Deserialize, Serialize};

use crate::Chunk;

/// A chunk annotated with its relevance to one query.
///
/// Lives only for the duration of a ranking call and is never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredChunk {
    /// The scored chunk.
    #[serde(flatten)]
    pub chunk: Chunk,

    /// Length-normalized, position-adjusted relevance.
    pub score: f64,

    /// Lexical match weight before normalization.
    pub raw_score: f64,

    /// Number of distinct query terms found in the chunk.
    pub match_words: u32,
}

/// A chunk selected by the ranker.
///
/// `Unscored` entries come from the fallback taken when the query has no
/// usable terms; they carry no relevance information.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RankedChunk {
    /// A chunk ranked by lexical score.
    Scored(ScoredChunk),
    /// A chunk returned in document order without scoring.
    Unscored(Chunk),
}

impl RankedChunk {
    /// Returns the underlying chunk.
    pub fn chunk(&self) -> &Chunk {
        match self {
            Self::Scored(scored) => &scored.chunk,
            Self::Unscored(chunk) => chunk,
        }
    }

    /// Returns the chunk text.
    pub fn content(&self) -> &str {
        &self.chunk().content
    }

    /// Returns the relevance score, if the chunk was scored.
    pub fn score(&self) -> Option<f64> {
        match self {
            Self::Scored(scored) => Some(scored.score),
            Self::Unscored(_) => None,
        }
    }

    /// Consumes the entry and returns the underlying chunk.
    pub fn into_chunk(self) -> Chunk {
        match self {
            Self::Scored(scored) => scored.chunk,
            Self::Unscored(chunk) => chunk,
        }
    }
}
