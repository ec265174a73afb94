//! Paragraph-aware word chunking.

use tracing::{debug, instrument};

use super::{Chunk, ChunkConfig};
use crate::TRACING_TARGET_CHUNK;

/// Separator placed between paragraphs accumulated into one chunk.
const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// Splits document text into ordered, overlapping chunks.
///
/// Paragraphs are accumulated until the next one would push the chunk past
/// the word budget. The trailing `overlap` words of a flushed chunk seed the
/// next one. A paragraph larger than the budget on its own is cut into
/// sliding word windows.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextChunker {
    config: ChunkConfig,
}

impl TextChunker {
    /// Creates a new chunker.
    pub fn new(config: ChunkConfig) -> Self {
        debug!(
            target: TRACING_TARGET_CHUNK,
            chunk_size = config.chunk_size(),
            overlap = config.overlap(),
            "created text chunker"
        );
        Self { config }
    }

    /// Returns the chunk geometry.
    pub fn config(&self) -> &ChunkConfig {
        &self.config
    }

    /// Splits `text` into chunks indexed from zero.
    ///
    /// Empty or whitespace-only input yields no chunks.
    #[instrument(target = "prepmate_rag::chunk", skip(self, text), fields(text_len = text.len()))]
    pub fn chunk(&self, text: &str) -> Vec<Chunk> {
        let normalized = normalize_whitespace(text);
        if normalized.is_empty() {
            return Vec::new();
        }

        let mut output = ChunkOutput::default();
        let mut buffer = ChunkBuffer::default();

        for paragraph in normalized.split('\n').filter(|p| !p.is_empty()) {
            let words: Vec<&str> = paragraph.split_whitespace().collect();

            if words.len() > self.config.chunk_size() {
                if let Some(content) = buffer.take() {
                    output.push(content);
                }

                for window in word_windows(&words, &self.config) {
                    output.push(window.join(" "));
                }
                continue;
            }

            if buffer.word_count + words.len() > self.config.chunk_size()
                && let Some(content) = buffer.take()
            {
                let carry = trailing_words(&content, self.config.overlap());
                output.push(content);
                buffer.push(carry);
            }

            buffer.push(paragraph.to_owned());
        }

        if let Some(content) = buffer.take() {
            output.push(content);
        }

        if output.is_empty() {
            debug!(
                target: TRACING_TARGET_CHUNK,
                "no paragraph chunks produced, falling back to word windows"
            );

            let words: Vec<&str> = normalized.split_whitespace().collect();
            for window in word_windows(&words, &self.config) {
                output.push(window.join(" "));
            }
        }

        let chunks = output.into_chunks();
        debug!(
            target: TRACING_TARGET_CHUNK,
            chunk_count = chunks.len(),
            "split text into chunks"
        );
        chunks
    }
}

/// Splits `text` into chunks using the given geometry.
pub fn chunk_text(text: &str, config: &ChunkConfig) -> Vec<Chunk> {
    TextChunker::new(*config).chunk(text)
}

/// Append-only chunk sequence assigning indices in emission order.
#[derive(Default)]
struct ChunkOutput {
    chunks: Vec<Chunk>,
}

impl ChunkOutput {
    fn push(&mut self, content: String) {
        if content.trim().is_empty() {
            return;
        }

        let chunk_index = self.chunks.len() as u32;
        self.chunks.push(Chunk::new(content, chunk_index));
    }

    fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    fn into_chunks(self) -> Vec<Chunk> {
        self.chunks
    }
}

/// Paragraphs accumulated for the chunk currently being built.
#[derive(Default)]
struct ChunkBuffer {
    parts: Vec<String>,
    word_count: usize,
}

impl ChunkBuffer {
    fn push(&mut self, part: String) {
        if part.is_empty() {
            return;
        }

        self.word_count += part.split_whitespace().count();
        self.parts.push(part);
    }

    /// Drains the buffer, returning the joined chunk content if any.
    fn take(&mut self) -> Option<String> {
        if self.parts.is_empty() {
            return None;
        }

        let content = self.parts.join(PARAGRAPH_SEPARATOR);
        self.parts.clear();
        self.word_count = 0;
        Some(content)
    }
}

/// Collapses whitespace runs within each line and drops blank lines.
///
/// Line breaks (`\n`, `\r\n` or a lone `\r`) survive as single `\n` so
/// paragraph boundaries stay visible.
fn normalize_whitespace(text: &str) -> String {
    text.split(['\r', '\n'])
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Returns the last `count` words of `content`, joined by single spaces.
fn trailing_words(content: &str, count: usize) -> String {
    let words: Vec<&str> = content.split_whitespace().collect();
    let start = words.len() - count.min(words.len());
    words[start..].join(" ")
}

/// Cuts `words` into windows of `chunk_size` words advancing by `step`.
///
/// Stops at the first window that reaches the end of `words`.
fn word_windows<'a>(words: &'a [&'a str], config: &ChunkConfig) -> Vec<&'a [&'a str]> {
    let mut windows = Vec::new();
    let mut start = 0;

    while start < words.len() {
        let end = (start + config.chunk_size()).min(words.len());
        windows.push(&words[start..end]);

        if start + config.chunk_size() >= words.len() {
            break;
        }
        start += config.step();
    }

    windows
}
