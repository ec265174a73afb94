//! Chunking and searching without a language model.

use std::path::{Path, PathBuf};

use anyhow::Context;
use prepmate_rag::{RankedChunk, RelevanceRanker, TextChunker};
use serde::Serialize;

use super::document;
use crate::TRACING_TARGET_COMMAND;

/// Result of chunking one document.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChunkReport {
    pub source: PathBuf,
    pub output: PathBuf,
    pub chunk_count: usize,
    pub word_count: usize,
}

/// Chunks `input` and writes the chunk file to `output`.
pub async fn chunk_document(
    input: &Path,
    output: &Path,
    chunker: &TextChunker,
) -> anyhow::Result<ChunkReport> {
    let text = document::load_text(input).await?;
    let chunks = chunker.chunk(&text);

    if chunks.is_empty() {
        tracing::warn!(
            target: TRACING_TARGET_COMMAND,
            source = %input.display(),
            "document has no text to chunk"
        );
    }

    document::write_chunks(output, &chunks).await?;

    tracing::info!(
        target: TRACING_TARGET_COMMAND,
        source = %input.display(),
        output = %output.display(),
        chunk_count = chunks.len(),
        "chunked document"
    );

    Ok(ChunkReport {
        source: input.to_owned(),
        output: output.to_owned(),
        chunk_count: chunks.len(),
        word_count: chunks.iter().map(|chunk| chunk.word_count()).sum(),
    })
}

/// Ranks the chunks stored in `chunks_path` against `query`.
pub async fn search(
    chunks_path: &Path,
    query: &str,
    ranker: &RelevanceRanker,
) -> anyhow::Result<Vec<RankedChunk>> {
    let chunks = document::read_chunks(chunks_path)
        .await
        .context("failed to load chunks")?;

    Ok(ranker.rank(&chunks, query))
}

#[cfg(test)]
mod tests {
    use prepmate_rag::ChunkConfig;

    use super::*;

    #[tokio::test]
    async fn test_chunk_then_search() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("biology.txt");
        let output = document::chunk_file_path(&input);
        tokio::fs::write(
            &input,
            "Mitochondria produce energy for the cell.\n\n\
             Chloroplasts capture light during photosynthesis.",
        )
        .await
        .unwrap();

        let chunker = TextChunker::new(ChunkConfig::new(6, 1).unwrap());
        let report = chunk_document(&input, &output, &chunker).await.unwrap();
        assert_eq!(report.chunk_count, 2);
        assert!(output.exists());

        let ranked = search(&output, "photosynthesis", &RelevanceRanker::new(3))
            .await
            .unwrap();
        assert_eq!(ranked.len(), 1);
        assert!(ranked[0].content().contains("photosynthesis"));
    }

    #[tokio::test]
    async fn test_chunk_empty_document() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("empty.txt");
        let output = dir.path().join("empty.chunks.json");
        tokio::fs::write(&input, "  \n\n ").await.unwrap();

        let report = chunk_document(&input, &output, &TextChunker::default())
            .await
            .unwrap();
        assert_eq!(report.chunk_count, 0);
        assert!(document::read_chunks(&output).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_search_missing_chunk_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = search(
            &dir.path().join("missing.json"),
            "anything",
            &RelevanceRanker::default(),
        )
        .await;
        assert!(result.is_err());
    }
}
