//! Text-generation providers.
//!
//! The study assistant only needs "send prompt, receive text". That contract
//! is [`TextGenerator`]; [`CompletionProvider`] implements it on top of
//! rig-core clients.

mod completion;
mod credentials;
#[cfg(any(test, feature = "test-utils"))]
mod mock;
mod model;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter};

pub use self::completion::CompletionProvider;
pub use self::credentials::{ApiKeyCredentials, Credentials};
#[cfg(any(test, feature = "test-utils"))]
pub use self::mock::ScriptedGenerator;
pub use self::model::{ModelSelection, ProviderKind};
use crate::Result;

/// Kind of generation request, used to pick a model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(AsRefStr, Display, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Task {
    /// Question answering over retrieved chunks.
    Chat,
    /// Flashcard generation.
    Flashcards,
    /// Multiple-choice quiz generation.
    Quiz,
    /// Document summary.
    Summary,
    /// In-depth concept explanation.
    Explain,
}

/// Sends a prompt to a language model and returns its text.
#[async_trait::async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generates text for `prompt` using the model assigned to `task`.
    async fn generate(&self, task: Task, prompt: &str) -> Result<String>;
}

#[async_trait::async_trait]
impl<T: TextGenerator + ?Sized> TextGenerator for std::sync::Arc<T> {
    async fn generate(&self, task: Task, prompt: &str) -> Result<String> {
        (**self).generate(task, prompt).await
    }
}
