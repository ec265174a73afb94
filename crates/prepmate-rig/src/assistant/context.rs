//! Prompt context assembly.

use prepmate_rag::RankedChunk;

/// Joins trimmed chunk contents with a blank line.
pub fn build_context(chunks: &[RankedChunk]) -> String {
    chunks
        .iter()
        .map(|chunk| chunk.content().trim())
        .filter(|content| !content.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Returns at most `max_chars` leading characters of `text`.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}
