//! Study assistant built on chunk retrieval and text generation.
//!
//! # Example
//!
//! ```ignore
//! let assistant = StudyAssistant::new(provider).with_ranker(RelevanceRanker::new(5));
//!
//! let reply = assistant.chat("What is osmosis?", &chunks, ChatMode::Strict).await?;
//! let cards = assistant.generate_flashcards(&text, 10).await?;
//! ```

mod chat;
mod context;
mod flashcard;
mod prompt;
mod quiz;

use prepmate_rag::{Chunk, RelevanceRanker};
use tracing::instrument;

pub use self::chat::{ChatMode, ChatReply, is_greeting};
pub use self::context::{build_context, truncate_chars};
pub use self::flashcard::{Difficulty, Flashcard, parse_flashcards};
pub use self::quiz::{OPTION_COUNT, QuizQuestion, parse_quiz};
use crate::provider::{Task, TextGenerator};
use crate::{Error, Result, TRACING_TARGET_ASSISTANT};

/// Maximum characters of document text sent for flashcards and quizzes.
pub const MAX_GENERATION_CHARS: usize = 15_000;

/// Maximum characters of document text sent for summaries.
pub const MAX_SUMMARY_CHARS: usize = 20_000;

/// Maximum characters of retrieved context sent for explanations.
pub const MAX_EXPLAIN_CONTEXT_CHARS: usize = 10_000;

/// Default number of flashcards per request.
pub const DEFAULT_FLASHCARD_COUNT: usize = 10;

/// Default number of quiz questions per request.
pub const DEFAULT_QUIZ_QUESTION_COUNT: usize = 5;

/// Answers questions and produces study material from document chunks.
#[derive(Debug, Clone)]
pub struct StudyAssistant<G> {
    generator: G,
    ranker: RelevanceRanker,
}

impl<G: TextGenerator> StudyAssistant<G> {
    /// Creates an assistant with the default ranker.
    pub fn new(generator: G) -> Self {
        Self {
            generator,
            ranker: RelevanceRanker::default(),
        }
    }

    /// Sets the ranker used to select context chunks.
    pub fn with_ranker(mut self, ranker: RelevanceRanker) -> Self {
        self.ranker = ranker;
        self
    }

    /// Returns the text generator.
    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Answers a question using the most relevant chunks as context.
    ///
    /// Bare greetings are answered without retrieval. An empty retrieval
    /// result is not an error; the prompt then states that no material is
    /// available.
    #[instrument(
        target = "prepmate_rig::assistant",
        skip_all,
        fields(chunk_count = chunks.len(), %mode)
    )]
    pub async fn chat(&self, question: &str, chunks: &[Chunk], mode: ChatMode) -> Result<ChatReply> {
        if is_greeting(question) {
            tracing::debug!(target: TRACING_TARGET_ASSISTANT, "answering greeting");
            let answer = self.generate(Task::Chat, &prompt::greeting(question.trim())).await?;
            return Ok(ChatReply {
                answer,
                chunks: Vec::new(),
            });
        }

        let ranked = self.ranker.rank(chunks, question);
        let context = build_context(&ranked);

        tracing::debug!(
            target: TRACING_TARGET_ASSISTANT,
            context_chunks = ranked.len(),
            context_len = context.len(),
            "built chat context"
        );

        let answer = self
            .generate(Task::Chat, &prompt::chat(question, &context, mode))
            .await?;

        Ok(ChatReply {
            answer,
            chunks: ranked,
        })
    }

    /// Explains a concept, grounded on the chunks most relevant to it.
    #[instrument(
        target = "prepmate_rig::assistant",
        skip(self, concept, chunks),
        fields(chunk_count = chunks.len())
    )]
    pub async fn explain_concept(&self, concept: &str, chunks: &[Chunk]) -> Result<String> {
        let ranked = self.ranker.rank(chunks, concept);
        let context = build_context(&ranked);
        let context = truncate_chars(&context, MAX_EXPLAIN_CONTEXT_CHARS);

        self.generate(Task::Explain, &prompt::explain(concept, context))
            .await
    }

    /// Summarizes document text.
    #[instrument(target = "prepmate_rig::assistant", skip(self, text), fields(text_len = text.len()))]
    pub async fn summarize(&self, text: &str) -> Result<String> {
        let text = truncate_chars(text, MAX_SUMMARY_CHARS);
        self.generate(Task::Summary, &prompt::summary(text)).await
    }

    /// Generates up to `count` flashcards from document text.
    #[instrument(target = "prepmate_rig::assistant", skip(self, text), fields(text_len = text.len()))]
    pub async fn generate_flashcards(&self, text: &str, count: usize) -> Result<Vec<Flashcard>> {
        let text = truncate_chars(text, MAX_GENERATION_CHARS);
        let response = self
            .generate(Task::Flashcards, &prompt::flashcards(text, count))
            .await?;

        let cards = parse_flashcards(&response, count);
        tracing::info!(
            target: TRACING_TARGET_ASSISTANT,
            requested = count,
            parsed = cards.len(),
            "generated flashcards"
        );
        Ok(cards)
    }

    /// Generates up to `count` multiple-choice questions from document text.
    #[instrument(target = "prepmate_rig::assistant", skip(self, text), fields(text_len = text.len()))]
    pub async fn generate_quiz(&self, text: &str, count: usize) -> Result<Vec<QuizQuestion>> {
        let text = truncate_chars(text, MAX_GENERATION_CHARS);
        let response = self.generate(Task::Quiz, &prompt::quiz(text, count)).await?;

        let questions = parse_quiz(&response, count);
        tracing::info!(
            target: TRACING_TARGET_ASSISTANT,
            requested = count,
            parsed = questions.len(),
            "generated quiz"
        );
        Ok(questions)
    }

    async fn generate(&self, task: Task, prompt: &str) -> Result<String> {
        let text = self.generator.generate(task, prompt).await?;
        if text.trim().is_empty() {
            return Err(Error::empty_response(task));
        }
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::ScriptedGenerator;

    fn document() -> Vec<Chunk> {
        vec![
            Chunk::new("Cells are the basic unit of life.", 0),
            Chunk::new("Mitochondria produce ATP through cellular respiration.", 1),
            Chunk::new("Photosynthesis happens in chloroplasts.", 2),
        ]
    }

    #[tokio::test]
    async fn test_chat_uses_relevant_context() {
        let assistant = StudyAssistant::new(ScriptedGenerator::new("ATP is made in mitochondria."));
        let reply = assistant
            .chat("Where is ATP produced?", &document(), ChatMode::Strict)
            .await
            .unwrap();

        assert_eq!(reply.answer, "ATP is made in mitochondria.");
        assert_eq!(reply.chunks.len(), 1);
        assert_eq!(reply.chunks[0].chunk().chunk_index, 1);

        let calls = assistant.generator().calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, Task::Chat);
        assert!(calls[0].1.contains("Mitochondria produce ATP"));
        assert!(!calls[0].1.contains("Photosynthesis"));
    }

    #[tokio::test]
    async fn test_chat_greeting_skips_retrieval() {
        let assistant = StudyAssistant::new(ScriptedGenerator::new("Hi there!"));
        let reply = assistant
            .chat("Hello!", &document(), ChatMode::Hybrid)
            .await
            .unwrap();

        assert!(reply.chunks.is_empty());
        let prompt = assistant.generator().last_prompt().unwrap();
        assert!(prompt.contains("greeted you"));
        assert!(!prompt.contains("Cells are the basic unit"));
    }

    #[tokio::test]
    async fn test_chat_without_relevant_chunks() {
        let assistant = StudyAssistant::new(ScriptedGenerator::new("Not in your notes."));
        let reply = assistant
            .chat("Explain quantum tunnelling", &document(), ChatMode::Strict)
            .await
            .unwrap();

        assert!(reply.chunks.is_empty());
        let prompt = assistant.generator().last_prompt().unwrap();
        assert!(prompt.contains("No study material is available"));
    }

    #[tokio::test]
    async fn test_empty_response_is_error() {
        let assistant = StudyAssistant::new(ScriptedGenerator::new("  "));
        let error = assistant.summarize("Some text").await.unwrap_err();
        assert_eq!(error, Error::empty_response(Task::Summary));
    }

    #[tokio::test]
    async fn test_provider_error_propagates() {
        let generator = ScriptedGenerator::new("unused")
            .with_response(Err(Error::rate_limited("gemini")));
        let assistant = StudyAssistant::new(generator);

        let error = assistant
            .explain_concept("respiration", &document())
            .await
            .unwrap_err();
        assert!(error.is_retryable());
    }

    #[tokio::test]
    async fn test_explain_concept_prompt() {
        let assistant = StudyAssistant::new(ScriptedGenerator::new("Photosynthesis is..."));
        let explanation = assistant
            .explain_concept("photosynthesis", &document())
            .await
            .unwrap();

        assert_eq!(explanation, "Photosynthesis is...");
        let (task, prompt) = assistant.generator().calls().remove(0);
        assert_eq!(task, Task::Explain);
        assert!(prompt.contains("Photosynthesis happens in chloroplasts."));
    }

    #[tokio::test]
    async fn test_summary_truncates_input() {
        let assistant = StudyAssistant::new(ScriptedGenerator::new("Summary"));
        let text = "ж".repeat(MAX_SUMMARY_CHARS + 500);
        assistant.summarize(&text).await.unwrap();

        let prompt = assistant.generator().last_prompt().unwrap();
        assert_eq!(prompt.matches('ж').count(), MAX_SUMMARY_CHARS);
    }

    #[tokio::test]
    async fn test_generate_flashcards() {
        let response = "Q: What is ATP?\nA: The energy currency of the cell.\nD: easy\n---\n\
                        Q: Why respire?\nA: To release energy.\n---\n\
                        Q: Extra?\nA: Dropped by the limit.";
        let assistant = StudyAssistant::new(ScriptedGenerator::new(response));

        let cards = assistant.generate_flashcards("text", 2).await.unwrap();
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].difficulty, Difficulty::Easy);
        assert_eq!(cards[1].difficulty, Difficulty::Medium);
        assert_eq!(assistant.generator().calls()[0].0, Task::Flashcards);
    }

    #[tokio::test]
    async fn test_generate_quiz() {
        let response = "Q: Powerhouse of the cell?\nO1: Nucleus\nO2: Mitochondrion\nO3: Wall\nO4: Vacuole\nC: Mitochondrion\nE: It makes ATP.";
        let assistant = StudyAssistant::new(ScriptedGenerator::new(response));

        let questions = assistant.generate_quiz("text", 5).await.unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].options.len(), OPTION_COUNT);
    }
}
