//! Document text extraction and chunk file storage.

use std::io;
use std::path::{Path, PathBuf};

use prepmate_rag::Chunk;

use crate::TRACING_TARGET_COMMAND;

/// File extension written next to the source document by `chunk`.
pub const CHUNK_FILE_EXTENSION: &str = "chunks.json";

const PDF_MAGIC: &[u8] = b"%PDF-";

/// Errors raised while reading documents or chunk files.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// The file could not be read.
    #[error("failed to read '{}': {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    /// The chunk file could not be written.
    #[error("failed to write '{}': {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    /// The PDF could not be parsed.
    #[error("failed to extract text from PDF '{}': {message}", path.display())]
    Pdf { path: PathBuf, message: String },

    /// A non-PDF file is not UTF-8 text.
    #[error("'{}' is not valid UTF-8 text", path.display())]
    Encoding { path: PathBuf },

    /// The chunk file is not a JSON list of chunks.
    #[error("'{}' is not a valid chunk file: {source}", path.display())]
    ChunkFile {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Returns the default chunk file path for a source document.
pub fn chunk_file_path(input: &Path) -> PathBuf {
    input.with_extension(CHUNK_FILE_EXTENSION)
}

/// Loads the plain text of a document.
///
/// PDFs are detected by extension or by their header and extracted with
/// `pdf-extract`; any other file is read as UTF-8 text.
pub async fn load_text(path: &Path) -> Result<String, DocumentError> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| DocumentError::Read {
            path: path.to_owned(),
            source,
        })?;

    if is_pdf(path, &bytes) {
        let owned = path.to_owned();
        let text = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes))
            .await
            .map_err(|e| DocumentError::Pdf {
                path: owned.clone(),
                message: e.to_string(),
            })?
            .map_err(|e| DocumentError::Pdf {
                path: owned,
                message: e.to_string(),
            })?;

        tracing::debug!(
            target: TRACING_TARGET_COMMAND,
            path = %path.display(),
            text_len = text.len(),
            "extracted pdf text"
        );
        return Ok(text);
    }

    String::from_utf8(bytes).map_err(|_| DocumentError::Encoding {
        path: path.to_owned(),
    })
}

fn is_pdf(path: &Path, bytes: &[u8]) -> bool {
    let by_extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));

    by_extension || bytes.starts_with(PDF_MAGIC)
}

/// Reads a chunk file, ordered by chunk index.
pub async fn read_chunks(path: &Path) -> Result<Vec<Chunk>, DocumentError> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| DocumentError::Read {
            path: path.to_owned(),
            source,
        })?;

    let mut chunks: Vec<Chunk> =
        serde_json::from_slice(&bytes).map_err(|source| DocumentError::ChunkFile {
            path: path.to_owned(),
            source,
        })?;

    chunks.sort_by_key(|chunk| chunk.chunk_index);
    Ok(chunks)
}

/// Writes a chunk file, replacing any previous contents.
pub async fn write_chunks(path: &Path, chunks: &[Chunk]) -> Result<(), DocumentError> {
    let json = serde_json::to_vec_pretty(chunks).map_err(|source| DocumentError::ChunkFile {
        path: path.to_owned(),
        source,
    })?;

    tokio::fs::write(path, json)
        .await
        .map_err(|source| DocumentError::Write {
            path: path.to_owned(),
            source,
        })
}
