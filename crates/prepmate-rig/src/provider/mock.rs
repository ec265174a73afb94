//! Scripted text generator for tests.
//!
//! Returns queued responses in order and records every prompt it receives.
//! Once the queue is drained it keeps answering with the fallback response.
//!
//! # Example
//!
//! ```rust,ignore
//! use prepmate_rig::provider::{ScriptedGenerator, Task, TextGenerator};
//!
//! let generator = ScriptedGenerator::new("Hello!");
//! let text = generator.generate(Task::Chat, "hi").await?;
//! assert_eq!(generator.calls()[0].0, Task::Chat);
//! ```

use std::collections::VecDeque;
use std::sync::Mutex;

use super::{Task, TextGenerator};
use crate::Result;

/// Text generator answering from a script instead of a model.
#[derive(Debug, Default)]
pub struct ScriptedGenerator {
    fallback: String,
    queue: Mutex<VecDeque<Result<String>>>,
    calls: Mutex<Vec<(Task, String)>>,
}

impl ScriptedGenerator {
    /// Creates a generator that always answers with `fallback`.
    pub fn new(fallback: impl Into<String>) -> Self {
        Self {
            fallback: fallback.into(),
            ..Self::default()
        }
    }

    /// Queues a response to be returned before the fallback.
    pub fn with_response(self, response: Result<String>) -> Self {
        self.lock_queue().push_back(response);
        self
    }

    /// Returns the recorded `(task, prompt)` pairs in call order.
    pub fn calls(&self) -> Vec<(Task, String)> {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Returns the most recent prompt, if any.
    pub fn last_prompt(&self) -> Option<String> {
        self.calls().pop().map(|(_, prompt)| prompt)
    }

    fn lock_queue(&self) -> std::sync::MutexGuard<'_, VecDeque<Result<String>>> {
        self.queue
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait::async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, task: Task, prompt: &str) -> Result<String> {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push((task, prompt.to_owned()));

        let queued = self.lock_queue().pop_front();
        queued.unwrap_or_else(|| Ok(self.fallback.clone()))
    }
}
