//! Lexical relevance ranking over stored chunks.
//!
//! Scores every chunk of a document against a free-text query and keeps the
//! best few as context for text generation. Scoring is purely lexical:
//!
//! - exact word-boundary matches weigh `3.0` each,
//! - extra substring matches beyond the exact ones weigh `1.5` each,
//! - a chunk containing more than one distinct query term gets `2.0` per term,
//! - the sum is divided by the square root of the chunk's word count,
//! - and scaled by a position bonus decaying linearly to `0.9` at the end of
//!   the document.
//!
//! Results are ordered by score, then by matched term count, then by chunk
//! index, so repeated calls always pick the same chunks.

mod query;
mod ranker;
mod scored;

pub use self::query::{QueryTerms, STOP_WORDS};
pub use self::ranker::{DEFAULT_MAX_CHUNKS, RelevanceRanker, find_relevant_chunks};
pub use self::scored::{RankedChunk, ScoredChunk};
