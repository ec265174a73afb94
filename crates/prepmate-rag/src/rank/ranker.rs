//! Chunk scoring and selection.

use std::cmp::Ordering;

use regex::Regex;
use tracing::{debug, instrument, warn};

use super::{QueryTerms, RankedChunk, ScoredChunk};
use crate::{Chunk, TRACING_TARGET_RANK};

/// Default number of chunks returned per query.
pub const DEFAULT_MAX_CHUNKS: usize = 3;

const EXACT_MATCH_WEIGHT: f64 = 3.0;
const PARTIAL_MATCH_WEIGHT: f64 = 1.5;
const CO_OCCURRENCE_WEIGHT: f64 = 2.0;
const MAX_POSITION_PENALTY: f64 = 0.1;

/// Selects the chunks most relevant to a query.
///
/// The ranker never mutates its input and never fails. An empty result means
/// no chunk carried any lexical signal for the query.
#[derive(Debug, Clone, Copy)]
pub struct RelevanceRanker {
    max_chunks: usize,
}

impl RelevanceRanker {
    /// Creates a ranker returning at most `max_chunks` chunks.
    pub fn new(max_chunks: usize) -> Self {
        Self { max_chunks }
    }

    /// Returns the result limit.
    pub fn max_chunks(&self) -> usize {
        self.max_chunks
    }

    /// Ranks `chunks` against `query`.
    ///
    /// When the query has no usable terms the first `max_chunks` chunks are
    /// returned unscored in their original order.
    #[instrument(
        target = "prepmate_rag::rank",
        skip(self, chunks, query),
        fields(chunk_count = chunks.len(), query_len = query.len())
    )]
    pub fn rank(&self, chunks: &[Chunk], query: &str) -> Vec<RankedChunk> {
        if chunks.is_empty() {
            return Vec::new();
        }

        let terms = QueryTerms::parse(query);
        if terms.is_empty() {
            debug!(
                target: TRACING_TARGET_RANK,
                "query has no usable terms, returning leading chunks"
            );

            return chunks
                .iter()
                .take(self.max_chunks)
                .cloned()
                .map(RankedChunk::Unscored)
                .collect();
        }

        let matchers: Vec<TermMatcher> = terms.iter().map(TermMatcher::new).collect();
        let total = chunks.len();

        let mut scored: Vec<ScoredChunk> = chunks
            .iter()
            .enumerate()
            .map(|(position, chunk)| score_chunk(chunk, position, total, &matchers))
            .filter(|scored| scored.score > 0.0)
            .collect();

        scored.sort_by(compare_scored);
        scored.truncate(self.max_chunks);

        debug!(
            target: TRACING_TARGET_RANK,
            term_count = terms.len(),
            result_count = scored.len(),
            "ranked chunks"
        );

        scored.into_iter().map(RankedChunk::Scored).collect()
    }
}

impl Default for RelevanceRanker {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_CHUNKS)
    }
}

/// Ranks `chunks` against `query`, keeping at most `max_chunks`.
pub fn find_relevant_chunks(chunks: &[Chunk], query: &str, max_chunks: usize) -> Vec<RankedChunk> {
    RelevanceRanker::new(max_chunks).rank(chunks, query)
}

/// A query term with its compiled word-boundary pattern.
struct TermMatcher<'a> {
    term: &'a str,
    exact: Option<Regex>,
}

impl<'a> TermMatcher<'a> {
    fn new(term: &'a str) -> Self {
        let pattern = format!(r"\b{}\b", regex::escape(term));
        let exact = match Regex::new(&pattern) {
            Ok(regex) => Some(regex),
            Err(error) => {
                warn!(
                    target: TRACING_TARGET_RANK,
                    term,
                    error = %error,
                    "failed to compile term pattern, counting substring matches only"
                );
                None
            }
        };

        Self { term, exact }
    }

    fn exact_matches(&self, content: &str) -> usize {
        self.exact
            .as_ref()
            .map_or(0, |regex| regex.find_iter(content).count())
    }

    fn partial_matches(&self, content: &str) -> usize {
        content.matches(self.term).count()
    }
}

fn score_chunk(
    chunk: &Chunk,
    position: usize,
    total: usize,
    matchers: &[TermMatcher<'_>],
) -> ScoredChunk {
    let content = chunk.content.to_lowercase();
    let word_count = content.split_whitespace().count().max(1);

    let mut raw_score = 0.0;
    let mut match_words = 0u32;

    for matcher in matchers {
        let exact = matcher.exact_matches(&content);
        let partial = matcher.partial_matches(&content);

        raw_score += EXACT_MATCH_WEIGHT * exact as f64;
        raw_score += PARTIAL_MATCH_WEIGHT * partial.saturating_sub(exact) as f64;

        if partial > 0 {
            match_words += 1;
        }
    }

    if match_words > 1 {
        raw_score += CO_OCCURRENCE_WEIGHT * f64::from(match_words);
    }

    let normalized = raw_score / (word_count as f64).sqrt();
    let position_bonus = 1.0 - (position as f64 / total as f64) * MAX_POSITION_PENALTY;

    ScoredChunk {
        chunk: chunk.clone(),
        score: normalized * position_bonus,
        raw_score,
        match_words,
    }
}

/// Orders by score descending, then matched terms descending, then index.
fn compare_scored(a: &ScoredChunk, b: &ScoredChunk) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| b.match_words.cmp(&a.match_words))
        .then_with(|| a.chunk.chunk_index.cmp(&b.chunk.chunk_index))
}
