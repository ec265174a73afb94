//! Flashcards and their response format.
//!
//! The model is asked for blocks separated by `---`, each with `Q:`, `A:`
//! and `D:` lines.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// Separator between generated blocks.
pub(crate) const BLOCK_SEPARATOR: &str = "---";

/// Difficulty of a flashcard or quiz question.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(AsRefStr, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// Recall of a single fact.
    Easy,
    /// Understanding of a concept.
    #[default]
    Medium,
    /// Applying or connecting several concepts.
    Hard,
}

impl Difficulty {
    /// Parses a difficulty label, falling back to [`Difficulty::Medium`].
    pub fn parse_or_default(label: &str) -> Self {
        label.trim().parse().unwrap_or_default()
    }
}

/// A generated question/answer card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    pub question: String,
    pub answer: String,
    pub difficulty: Difficulty,
}

/// Parses generated flashcards, keeping at most `limit`.
///
/// Blocks without both a question and an answer are skipped.
pub fn parse_flashcards(text: &str, limit: usize) -> Vec<Flashcard> {
    text.split(BLOCK_SEPARATOR)
        .filter(|block| !block.trim().is_empty())
        .filter_map(parse_block)
        .take(limit)
        .collect()
}

fn parse_block(block: &str) -> Option<Flashcard> {
    let mut question = "";
    let mut answer = "";
    let mut difficulty = Difficulty::default();

    for line in block.lines().map(str::trim) {
        if let Some(rest) = line.strip_prefix("Q:") {
            question = rest.trim();
        } else if let Some(rest) = line.strip_prefix("A:") {
            answer = rest.trim();
        } else if let Some(rest) = line.strip_prefix("D:") {
            difficulty = Difficulty::parse_or_default(rest);
        }
    }

    if question.is_empty() || answer.is_empty() {
        return None;
    }

    Some(Flashcard {
        question: question.to_owned(),
        answer: answer.to_owned(),
        difficulty,
    })
}
