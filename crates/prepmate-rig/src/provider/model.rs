//! Provider kinds and per-task model selection.

#[cfg(feature = "config")]
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

use super::Task;

/// Supported completion providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(AsRefStr, Display, EnumString)]
#[cfg_attr(feature = "config", derive(ValueEnum))]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ProviderKind {
    /// Google Gemini.
    Gemini,
    /// OpenAI.
    #[serde(rename = "openai")]
    #[strum(serialize = "openai")]
    #[cfg_attr(feature = "config", value(name = "openai"))]
    OpenAi,
    /// Anthropic.
    Anthropic,
}

/// Model identifiers assigned to each generation task.
///
/// Conversational tasks default to a lighter model than document-wide
/// generation tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelSelection {
    /// Model for chat answers.
    pub chat: String,
    /// Model for flashcard generation.
    pub flashcards: String,
    /// Model for quiz generation.
    pub quiz: String,
    /// Model for summaries.
    pub summary: String,
    /// Model for concept explanations.
    pub explain: String,
}

impl ModelSelection {
    /// Uses `light` for conversational tasks and `full` for the rest.
    pub fn tiered(light: impl Into<String>, full: impl Into<String>) -> Self {
        let light = light.into();
        let full = full.into();
        Self {
            chat: light.clone(),
            flashcards: full.clone(),
            quiz: full.clone(),
            summary: full,
            explain: light,
        }
    }

    /// Uses one model for every task.
    pub fn uniform(model: impl Into<String>) -> Self {
        let model = model.into();
        Self::tiered(model.clone(), model)
    }

    /// Returns the default models for a provider.
    pub fn defaults(kind: ProviderKind) -> Self {
        match kind {
            ProviderKind::Gemini => Self::tiered("gemini-2.5-flash-lite", "gemini-2.5-flash"),
            ProviderKind::OpenAi => Self::tiered("gpt-4o-mini", "gpt-4o"),
            ProviderKind::Anthropic => {
                Self::tiered("claude-3-5-haiku-20241022", "claude-sonnet-4-20250514")
            }
        }
    }

    /// Returns the model assigned to `task`.
    pub fn model_for(&self, task: Task) -> &str {
        match task {
            Task::Chat => &self.chat,
            Task::Flashcards => &self.flashcards,
            Task::Quiz => &self.quiz,
            Task::Summary => &self.summary,
            Task::Explain => &self.explain,
        }
    }
}
