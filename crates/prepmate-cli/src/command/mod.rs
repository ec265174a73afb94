//! Subcommands and their execution.

mod document;
mod index;
mod study;

use std::path::PathBuf;

use anyhow::Context;
use clap::Subcommand;
use prepmate_rig::assistant::{
    ChatMode, DEFAULT_FLASHCARD_COUNT, DEFAULT_QUIZ_QUESTION_COUNT, StudyAssistant,
};
use prepmate_rig::provider::CompletionProvider;
use serde::Serialize;

use crate::TRACING_TARGET_COMMAND;
use crate::config::Cli;

/// Available subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Extract text from a document and write its chunks as JSON.
    Chunk {
        /// Source document (.pdf or UTF-8 text).
        input: PathBuf,
        /// Chunk file to write (defaults to `<input>.chunks.json`).
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Rank stored chunks against a query.
    Search {
        /// Chunk file written by `chunk`.
        chunks: PathBuf,
        /// Search query.
        query: String,
    },

    /// Answer a question from stored chunks.
    Chat {
        /// Chunk file written by `chunk`.
        chunks: PathBuf,
        /// Question to answer.
        question: String,
        /// Whether answers may go beyond the study material.
        #[arg(long, value_enum, default_value_t = ChatMode::Hybrid)]
        mode: ChatMode,
    },

    /// Explain a concept using stored chunks as reference.
    Explain {
        /// Chunk file written by `chunk`.
        chunks: PathBuf,
        /// Concept to explain.
        concept: String,
    },

    /// Summarize a document.
    Summarize {
        /// Source document (.pdf or UTF-8 text).
        input: PathBuf,
    },

    /// Generate flashcards from a document.
    Flashcards {
        /// Source document (.pdf or UTF-8 text).
        input: PathBuf,
        /// Number of flashcards to request.
        #[arg(long, default_value_t = DEFAULT_FLASHCARD_COUNT)]
        count: usize,
    },

    /// Generate a multiple-choice quiz from a document.
    Quiz {
        /// Source document (.pdf or UTF-8 text).
        input: PathBuf,
        /// Number of questions to request.
        #[arg(long, default_value_t = DEFAULT_QUIZ_QUESTION_COUNT)]
        count: usize,
    },
}

impl Command {
    /// Returns the subcommand name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Chunk { .. } => "chunk",
            Self::Search { .. } => "search",
            Self::Chat { .. } => "chat",
            Self::Explain { .. } => "explain",
            Self::Summarize { .. } => "summarize",
            Self::Flashcards { .. } => "flashcards",
            Self::Quiz { .. } => "quiz",
        }
    }

    /// Returns true if the command calls the language model.
    pub fn requires_provider(&self) -> bool {
        !matches!(self, Self::Chunk { .. } | Self::Search { .. })
    }

    /// Runs the command and prints its result as JSON on stdout.
    pub async fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        tracing::debug!(
            target: TRACING_TARGET_COMMAND,
            command = self.name(),
            "running command"
        );

        match self {
            Self::Chunk { input, output } => {
                let output = output
                    .clone()
                    .unwrap_or_else(|| document::chunk_file_path(input));
                let chunker = cli.rag.chunker()?;
                print_json(&index::chunk_document(input, &output, &chunker).await?)
            }
            Self::Search { chunks, query } => {
                let ranker = cli.rag.ranker()?;
                print_json(&index::search(chunks, query, &ranker).await?)
            }
            Self::Chat {
                chunks,
                question,
                mode,
            } => {
                let assistant = create_assistant(cli)?;
                print_json(&study::chat(&assistant, chunks, question, *mode).await?)
            }
            Self::Explain { chunks, concept } => {
                let assistant = create_assistant(cli)?;
                print_json(&study::explain(&assistant, chunks, concept).await?)
            }
            Self::Summarize { input } => {
                let assistant = create_assistant(cli)?;
                print_json(&study::summarize(&assistant, input).await?)
            }
            Self::Flashcards { input, count } => {
                let assistant = create_assistant(cli)?;
                print_json(&study::flashcards(&assistant, input, *count).await?)
            }
            Self::Quiz { input, count } => {
                let assistant = create_assistant(cli)?;
                print_json(&study::quiz(&assistant, input, *count).await?)
            }
        }
    }
}

/// Creates the study assistant from provider and retrieval configuration.
fn create_assistant(cli: &Cli) -> anyhow::Result<StudyAssistant<CompletionProvider>> {
    let provider = cli
        .provider
        .connect()
        .context("failed to create completion provider")?;

    tracing::info!(
        target: TRACING_TARGET_COMMAND,
        provider = provider.provider_name(),
        "completion provider ready"
    );

    Ok(StudyAssistant::new(provider).with_ranker(cli.rag.ranker()?))
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value).context("failed to serialize output")?;
    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requires_provider() {
        let search = Command::Search {
            chunks: PathBuf::from("notes.json"),
            query: "osmosis".to_owned(),
        };
        let quiz = Command::Quiz {
            input: PathBuf::from("notes.pdf"),
            count: DEFAULT_QUIZ_QUESTION_COUNT,
        };

        assert!(!search.requires_provider());
        assert!(quiz.requires_provider());
        assert_eq!(quiz.name(), "quiz");
    }
}
