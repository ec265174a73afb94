//! Multiple-choice quiz questions and their response format.
//!
//! Blocks are separated by `---` and carry `Q:`, `O1:`..`O4:`, `C:`, `E:`
//! and `D:` lines.

use serde::{Deserialize, Serialize};

use super::flashcard::{BLOCK_SEPARATOR, Difficulty};

/// Number of options every quiz question must have.
pub const OPTION_COUNT: usize = 4;

/// A generated multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: String,
    pub explanation: String,
    pub difficulty: Difficulty,
}

/// Parses generated quiz questions, keeping at most `limit`.
///
/// Blocks need a question, exactly [`OPTION_COUNT`] options and a correct
/// answer to be kept.
pub fn parse_quiz(text: &str, limit: usize) -> Vec<QuizQuestion> {
    text.split(BLOCK_SEPARATOR)
        .filter(|block| !block.trim().is_empty())
        .filter_map(parse_block)
        .take(limit)
        .collect()
}

fn parse_block(block: &str) -> Option<QuizQuestion> {
    let mut question = "";
    let mut options = Vec::with_capacity(OPTION_COUNT);
    let mut correct_answer = "";
    let mut explanation = "";
    let mut difficulty = Difficulty::default();

    for line in block.lines().map(str::trim) {
        if let Some(rest) = line.strip_prefix("Q:") {
            question = rest.trim();
        } else if let Some(rest) = strip_option_label(line) {
            options.push(rest.trim().to_owned());
        } else if let Some(rest) = line.strip_prefix("C:") {
            correct_answer = rest.trim();
        } else if let Some(rest) = line.strip_prefix("E:") {
            explanation = rest.trim();
        } else if let Some(rest) = line.strip_prefix("D:") {
            difficulty = Difficulty::parse_or_default(rest);
        }
    }

    if question.is_empty() || options.len() != OPTION_COUNT || correct_answer.is_empty() {
        return None;
    }

    Some(QuizQuestion {
        question: question.to_owned(),
        options,
        correct_answer: correct_answer.to_owned(),
        explanation: explanation.to_owned(),
        difficulty,
    })
}

/// Strips an `O<digit>:` label.
fn strip_option_label(line: &str) -> Option<&str> {
    let rest = line.strip_prefix('O')?;
    let mut chars = rest.chars();
    match (chars.next(), chars.next()) {
        (Some(digit), Some(':')) if digit.is_ascii_digit() => Some(chars.as_str()),
        _ => None,
    }
}
