//! Completion provider backed by rig-core clients.

use std::fmt;
use std::sync::Arc;

use rig::completion::{AssistantContent, CompletionError, CompletionModel as RigCompletionModel};
use rig::one_or_many::OneOrMany;
use rig::prelude::CompletionClient;
use rig::providers::{anthropic, gemini, openai};

use super::{Credentials, ModelSelection, Task, TextGenerator};
use crate::{Error, Result, TRACING_TARGET_PROVIDER};

/// Completion provider holding one rig completion model per task.
///
/// This is a cheaply cloneable wrapper around an `Arc<CompletionService>`.
#[derive(Clone)]
pub struct CompletionProvider(Arc<CompletionService>);

enum CompletionService {
    Gemini(TaskModels<gemini::completion::CompletionModel>),
    OpenAi(TaskModels<openai::CompletionModel>),
    Anthropic(TaskModels<anthropic::completion::CompletionModel>),
}

/// Models built from a [`ModelSelection`], indexed by task.
struct TaskModels<M> {
    selection: ModelSelection,
    chat: M,
    flashcards: M,
    quiz: M,
    summary: M,
    explain: M,
}

impl<M> TaskModels<M> {
    fn build(selection: ModelSelection, make: impl Fn(&str) -> M) -> Self {
        Self {
            chat: make(&selection.chat),
            flashcards: make(&selection.flashcards),
            quiz: make(&selection.quiz),
            summary: make(&selection.summary),
            explain: make(&selection.explain),
            selection,
        }
    }

    fn get(&self, task: Task) -> &M {
        match task {
            Task::Chat => &self.chat,
            Task::Flashcards => &self.flashcards,
            Task::Quiz => &self.quiz,
            Task::Summary => &self.summary,
            Task::Explain => &self.explain,
        }
    }
}

impl CompletionProvider {
    /// Creates a provider from credentials and per-task model identifiers.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Provider`] if the underlying client cannot be created.
    pub fn connect(credentials: Credentials, models: ModelSelection) -> Result<Self> {
        let inner = match credentials {
            Credentials::Gemini(c) => {
                let client = gemini::Client::new(&c.api_key)
                    .map_err(|e| Error::provider("gemini", e.to_string()))?;
                CompletionService::Gemini(TaskModels::build(models, |name| {
                    client.completion_model(name)
                }))
            }
            Credentials::OpenAi(c) => {
                let client = openai::Client::new(&c.api_key)
                    .map_err(|e| Error::provider("openai", e.to_string()))?
                    .completions_api();
                CompletionService::OpenAi(TaskModels::build(models, |name| {
                    client.completion_model(name)
                }))
            }
            Credentials::Anthropic(c) => {
                let client = anthropic::Client::new(&c.api_key)
                    .map_err(|e| Error::provider("anthropic", e.to_string()))?;
                CompletionService::Anthropic(TaskModels::build(models, |name| {
                    client.completion_model(name)
                }))
            }
        };

        let provider = Self(Arc::new(inner));
        tracing::info!(
            target: TRACING_TARGET_PROVIDER,
            provider = provider.provider_name(),
            chat_model = provider.model_name(Task::Chat),
            summary_model = provider.model_name(Task::Summary),
            "created completion provider"
        );
        Ok(provider)
    }

    /// Returns the provider name.
    pub fn provider_name(&self) -> &'static str {
        match self.0.as_ref() {
            CompletionService::Gemini(_) => "gemini",
            CompletionService::OpenAi(_) => "openai",
            CompletionService::Anthropic(_) => "anthropic",
        }
    }

    /// Returns the model identifier used for `task`.
    pub fn model_name(&self, task: Task) -> &str {
        self.selection().model_for(task)
    }

    fn selection(&self) -> &ModelSelection {
        match self.0.as_ref() {
            CompletionService::Gemini(models) => &models.selection,
            CompletionService::OpenAi(models) => &models.selection,
            CompletionService::Anthropic(models) => &models.selection,
        }
    }

    /// Sends a single-turn completion request for `task`.
    pub async fn complete(&self, task: Task, prompt: &str) -> Result<String> {
        let provider = self.provider_name();
        let map_err = |e: CompletionError| classify_error(provider, e);

        match self.0.as_ref() {
            CompletionService::Gemini(models) => models
                .get(task)
                .completion_request(prompt)
                .send()
                .await
                .map(|r| extract_text_content(&r.choice))
                .map_err(map_err),
            CompletionService::OpenAi(models) => models
                .get(task)
                .completion_request(prompt)
                .send()
                .await
                .map(|r| extract_text_content(&r.choice))
                .map_err(map_err),
            CompletionService::Anthropic(models) => models
                .get(task)
                .completion_request(prompt)
                .send()
                .await
                .map(|r| extract_text_content(&r.choice))
                .map_err(map_err),
        }
    }
}

#[async_trait::async_trait]
impl TextGenerator for CompletionProvider {
    async fn generate(&self, task: Task, prompt: &str) -> Result<String> {
        tracing::debug!(
            target: TRACING_TARGET_PROVIDER,
            provider = self.provider_name(),
            model = self.model_name(task),
            %task,
            prompt_len = prompt.len(),
            "sending completion request"
        );

        let text = self.complete(task, prompt).await.inspect_err(|error| {
            tracing::error!(
                target: TRACING_TARGET_PROVIDER,
                provider = self.provider_name(),
                %task,
                error = %error,
                "completion request failed"
            );
        })?;

        tracing::debug!(
            target: TRACING_TARGET_PROVIDER,
            %task,
            response_len = text.len(),
            "received completion response"
        );
        Ok(text)
    }
}

/// Maps a rig completion error, singling out rate limiting.
fn classify_error(provider: &str, error: CompletionError) -> Error {
    let message = error.to_string();
    let lowered = message.to_lowercase();

    if lowered.contains("429") || lowered.contains("rate limit") || lowered.contains("quota") {
        Error::rate_limited(provider)
    } else {
        Error::provider(provider, message)
    }
}

/// Extracts text content from assistant content choices.
fn extract_text_content(choice: &OneOrMany<AssistantContent>) -> String {
    choice
        .iter()
        .filter_map(|content| match content {
            AssistantContent::Text(text) => Some(text.text()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("")
}

impl fmt::Debug for CompletionProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompletionProvider")
            .field("provider", &self.provider_name())
            .field("models", self.selection())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_rate_limit() {
        let error = classify_error(
            "gemini",
            CompletionError::ProviderError("HTTP 429 Too Many Requests".into()),
        );
        assert_eq!(error, Error::rate_limited("gemini"));
    }

    #[test]
    fn test_classify_other_provider_error() {
        let error = classify_error(
            "openai",
            CompletionError::ProviderError("invalid request".into()),
        );
        assert!(matches!(error, Error::Provider { ref provider, .. } if provider == "openai"));
    }
}
