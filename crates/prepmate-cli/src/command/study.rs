//! Commands that call the study assistant.

use std::path::Path;

use anyhow::Context;
use prepmate_rig::assistant::{ChatMode, ChatReply, Flashcard, QuizQuestion, StudyAssistant};
use prepmate_rig::provider::TextGenerator;
use serde::Serialize;

use super::document;

/// Explanation of a single concept.
#[derive(Debug, Clone, Serialize)]
pub struct Explanation {
    pub concept: String,
    pub explanation: String,
}

/// Summary of a document.
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub summary: String,
}

pub async fn chat<G: TextGenerator>(
    assistant: &StudyAssistant<G>,
    chunks_path: &Path,
    question: &str,
    mode: ChatMode,
) -> anyhow::Result<ChatReply> {
    let chunks = document::read_chunks(chunks_path)
        .await
        .context("failed to load chunks")?;

    assistant
        .chat(question, &chunks, mode)
        .await
        .context("failed to answer question")
}

pub async fn explain<G: TextGenerator>(
    assistant: &StudyAssistant<G>,
    chunks_path: &Path,
    concept: &str,
) -> anyhow::Result<Explanation> {
    let chunks = document::read_chunks(chunks_path)
        .await
        .context("failed to load chunks")?;

    let explanation = assistant
        .explain_concept(concept, &chunks)
        .await
        .context("failed to explain concept")?;

    Ok(Explanation {
        concept: concept.to_owned(),
        explanation,
    })
}

pub async fn summarize<G: TextGenerator>(
    assistant: &StudyAssistant<G>,
    input: &Path,
) -> anyhow::Result<Summary> {
    let text = load_study_text(input).await?;
    let summary = assistant
        .summarize(&text)
        .await
        .context("failed to summarize document")?;

    Ok(Summary { summary })
}

pub async fn flashcards<G: TextGenerator>(
    assistant: &StudyAssistant<G>,
    input: &Path,
    count: usize,
) -> anyhow::Result<Vec<Flashcard>> {
    let text = load_study_text(input).await?;
    assistant
        .generate_flashcards(&text, count)
        .await
        .context("failed to generate flashcards")
}

pub async fn quiz<G: TextGenerator>(
    assistant: &StudyAssistant<G>,
    input: &Path,
    count: usize,
) -> anyhow::Result<Vec<QuizQuestion>> {
    let text = load_study_text(input).await?;
    assistant
        .generate_quiz(&text, count)
        .await
        .context("failed to generate quiz")
}

/// Loads document text, refusing documents with nothing to study.
async fn load_study_text(input: &Path) -> anyhow::Result<String> {
    let text = document::load_text(input).await?;
    if text.trim().is_empty() {
        anyhow::bail!("'{}' contains no text", input.display());
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use prepmate_rag::Chunk;
    use prepmate_rig::provider::{ScriptedGenerator, Task};
    use tempfile::TempDir;

    use super::*;

    async fn chunk_file(dir: &TempDir) -> PathBuf {
        let path = dir.path().join("notes.chunks.json");
        let chunks = vec![
            Chunk::new("Osmosis moves water across a membrane.", 0),
            Chunk::new("Diffusion spreads particles evenly.", 1),
        ];
        document::write_chunks(&path, &chunks).await.unwrap();
        path
    }

    async fn text_file(dir: &TempDir, text: &str) -> PathBuf {
        let path = dir.path().join("notes.txt");
        tokio::fs::write(&path, text).await.unwrap();
        path
    }

    #[tokio::test]
    async fn test_chat_from_chunk_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = chunk_file(&dir).await;
        let assistant = StudyAssistant::new(ScriptedGenerator::new("Water moves."));

        let reply = chat(&assistant, &path, "How does osmosis work?", ChatMode::Strict)
            .await
            .unwrap();

        assert_eq!(reply.answer, "Water moves.");
        assert_eq!(reply.chunks.len(), 1);
        assert_eq!(reply.chunks[0].chunk().chunk_index, 0);
    }

    #[tokio::test]
    async fn test_explain_from_chunk_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = chunk_file(&dir).await;
        let assistant = StudyAssistant::new(ScriptedGenerator::new("Diffusion is..."));

        let result = explain(&assistant, &path, "diffusion").await.unwrap();
        assert_eq!(result.concept, "diffusion");
        assert_eq!(result.explanation, "Diffusion is...");

        let (task, prompt) = assistant.generator().calls().remove(0);
        assert_eq!(task, Task::Explain);
        assert!(prompt.contains("Diffusion spreads particles evenly."));
    }

    #[tokio::test]
    async fn test_summarize_text_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = text_file(&dir, "Cells are the unit of life.").await;
        let assistant = StudyAssistant::new(ScriptedGenerator::new("Cells matter."));

        let result = summarize(&assistant, &path).await.unwrap();
        assert_eq!(result.summary, "Cells matter.");
        assert_eq!(assistant.generator().calls()[0].0, Task::Summary);
    }

    #[tokio::test]
    async fn test_flashcards_respect_count() {
        let dir = tempfile::tempdir().unwrap();
        let path = text_file(&dir, "Cells are the unit of life.").await;
        let response = "Q: One?\nA: 1\n---\nQ: Two?\nA: 2\n---\nQ: Three?\nA: 3";
        let assistant = StudyAssistant::new(ScriptedGenerator::new(response));

        let cards = flashcards(&assistant, &path, 2).await.unwrap();
        assert_eq!(cards.len(), 2);
    }

    #[tokio::test]
    async fn test_quiz_from_text_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = text_file(&dir, "Cells are the unit of life.").await;
        let response = "Q: Unit of life?\nO1: Atom\nO2: Cell\nO3: Organ\nO4: Tissue\nC: Cell\nE: Cells.";
        let assistant = StudyAssistant::new(ScriptedGenerator::new(response));

        let questions = quiz(&assistant, &path, 5).await.unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].correct_answer, "Cell");
    }

    #[tokio::test]
    async fn test_empty_document_not_sent() {
        let dir = tempfile::tempdir().unwrap();
        let path = text_file(&dir, " \n ").await;
        let assistant = StudyAssistant::new(ScriptedGenerator::new("unused"));

        assert!(summarize(&assistant, &path).await.is_err());
        assert!(assistant.generator().calls().is_empty());
    }
}
