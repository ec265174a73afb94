//! Chat modes and replies.

use std::sync::LazyLock;

#[cfg(feature = "config")]
use clap::ValueEnum;
use prepmate_rag::RankedChunk;
use regex::Regex;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

static GREETING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(hi|hello|hey|hii|hiii|good morning|good afternoon|good evening|sup|yo|hola|greetings)[!?.\s]*$",
    )
    .expect("greeting pattern is valid")
});

/// How strictly answers are bound to the study material.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[derive(AsRefStr, Display, EnumString)]
#[cfg_attr(feature = "config", derive(ValueEnum))]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ChatMode {
    /// Answer only from the retrieved material.
    Strict,
    /// Prefer the material, supplement with general knowledge.
    #[default]
    Hybrid,
}

/// Answer to a chat question with the chunks it was grounded on.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatReply {
    /// Generated answer.
    pub answer: String,
    /// Chunks used as context, best first. Empty for greetings.
    pub chunks: Vec<RankedChunk>,
}

/// Returns true if `message` is a bare greeting.
pub fn is_greeting(message: &str) -> bool {
    GREETING.is_match(message.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greetings() {
        for message in ["hi", "Hello!", "  hey  ", "Good Morning.", "hola?!", "yo"] {
            assert!(is_greeting(message), "{message:?} should be a greeting");
        }
    }

    #[test]
    fn test_questions_are_not_greetings() {
        for message in ["hi, what is osmosis?", "hello world", "history", "", "say hi"] {
            assert!(!is_greeting(message), "{message:?} should not be a greeting");
        }
    }

    #[test]
    fn test_chat_mode_parsing() {
        assert_eq!(ChatMode::default(), ChatMode::Hybrid);
        assert_eq!("STRICT".parse::<ChatMode>().unwrap(), ChatMode::Strict);
        assert_eq!(ChatMode::Hybrid.to_string(), "hybrid");
    }
}
