//! Completion provider configuration.

#[cfg(feature = "config")]
use clap::Args;
use serde::{Deserialize, Serialize};

use crate::provider::{CompletionProvider, Credentials, ModelSelection, ProviderKind};
use crate::{Error, Result, TRACING_TARGET};

/// Configuration for the text-generation provider.
///
/// The API key is required before any provider is created; a missing key is
/// reported as a configuration error at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "config", derive(Args))]
pub struct ProviderConfig {
    /// Completion provider.
    #[cfg_attr(
        feature = "config",
        arg(long = "llm-provider", env = "LLM_PROVIDER", value_enum, default_value = "gemini")
    )]
    #[serde(default = "default_provider")]
    pub provider: ProviderKind,

    /// API key for the completion provider.
    #[cfg_attr(
        feature = "config",
        arg(long = "llm-api-key", env = "LLM_API_KEY", hide_env_values = true)
    )]
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,

    /// Model used for chat answers (provider default if unset).
    #[cfg_attr(feature = "config", arg(long = "chat-model", env = "CHAT_MODEL"))]
    #[serde(default)]
    pub chat_model: Option<String>,

    /// Model used for flashcard generation (provider default if unset).
    #[cfg_attr(feature = "config", arg(long = "flashcards-model", env = "FLASHCARDS_MODEL"))]
    #[serde(default)]
    pub flashcards_model: Option<String>,

    /// Model used for quiz generation (provider default if unset).
    #[cfg_attr(feature = "config", arg(long = "quiz-model", env = "QUIZ_MODEL"))]
    #[serde(default)]
    pub quiz_model: Option<String>,

    /// Model used for summaries (provider default if unset).
    #[cfg_attr(feature = "config", arg(long = "summary-model", env = "SUMMARY_MODEL"))]
    #[serde(default)]
    pub summary_model: Option<String>,

    /// Model used for concept explanations (provider default if unset).
    #[cfg_attr(feature = "config", arg(long = "explain-model", env = "EXPLAIN_MODEL"))]
    #[serde(default)]
    pub explain_model: Option<String>,
}

fn default_provider() -> ProviderKind {
    ProviderKind::Gemini
}

impl ProviderConfig {
    /// Creates a configuration for `provider` with default models.
    pub fn new(provider: ProviderKind, api_key: impl Into<String>) -> Self {
        Self {
            provider,
            api_key: Some(api_key.into()),
            chat_model: None,
            flashcards_model: None,
            quiz_model: None,
            summary_model: None,
            explain_model: None,
        }
    }

    /// Validates that the provider can be created.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the API key is missing or blank.
    pub fn validate(&self) -> Result<()> {
        match self.api_key.as_deref().map(str::trim) {
            Some(key) if !key.is_empty() => Ok(()),
            _ => Err(Error::config(format!(
                "missing API key for {} provider (set LLM_API_KEY or pass --llm-api-key)",
                self.provider
            ))),
        }
    }

    /// Returns the credentials for the configured provider.
    pub fn credentials(&self) -> Result<Credentials> {
        self.validate()?;
        let api_key = self.api_key.as_deref().unwrap_or_default().trim();
        Ok(Credentials::new(self.provider, api_key))
    }

    /// Returns provider defaults with any per-task overrides applied.
    pub fn models(&self) -> ModelSelection {
        let mut models = ModelSelection::defaults(self.provider);
        let overrides = [
            (&mut models.chat, &self.chat_model),
            (&mut models.flashcards, &self.flashcards_model),
            (&mut models.quiz, &self.quiz_model),
            (&mut models.summary, &self.summary_model),
            (&mut models.explain, &self.explain_model),
        ];

        for (slot, value) in overrides {
            if let Some(model) = value {
                slot.clone_from(model);
            }
        }

        models
    }

    /// Creates the completion provider.
    pub fn connect(&self) -> Result<CompletionProvider> {
        let credentials = self.credentials()?;
        tracing::debug!(
            target: TRACING_TARGET,
            provider = %self.provider,
            "connecting completion provider"
        );
        CompletionProvider::connect(credentials, self.models())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::Task;

    fn without_key() -> ProviderConfig {
        ProviderConfig {
            api_key: None,
            ..ProviderConfig::new(ProviderKind::Gemini, "")
        }
    }

    #[test]
    fn test_missing_api_key_is_config_error() {
        let error = without_key().validate().unwrap_err();
        assert!(matches!(error, Error::Config(ref message) if message.contains("LLM_API_KEY")));
    }

    #[test]
    fn test_blank_api_key_is_rejected() {
        let config = ProviderConfig::new(ProviderKind::OpenAi, "   ");
        assert!(config.validate().is_err());
        assert!(config.credentials().is_err());
    }

    #[test]
    fn test_credentials_match_provider() {
        let config = ProviderConfig::new(ProviderKind::Anthropic, " key ");
        let credentials = config.credentials().unwrap();
        assert_eq!(credentials.kind(), ProviderKind::Anthropic);
    }

    #[test]
    fn test_model_overrides() {
        let config = ProviderConfig {
            quiz_model: Some("gemini-2.5-pro".into()),
            ..ProviderConfig::new(ProviderKind::Gemini, "key")
        };
        let models = config.models();

        assert_eq!(models.model_for(Task::Quiz), "gemini-2.5-pro");
        assert_eq!(models.model_for(Task::Chat), "gemini-2.5-flash-lite");
    }

    #[test]
    fn test_api_key_is_not_serialized() {
        let json = serde_json::to_value(ProviderConfig::new(ProviderKind::Gemini, "secret")).unwrap();
        assert!(json.get("api_key").is_none());
        assert_eq!(json["provider"], "gemini");
    }
}
