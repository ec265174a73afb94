//! CLI configuration management.
//!
//! ```text
//! Cli
//! ├── rag: RagConfig            # Chunk size, overlap, chunks per query
//! ├── provider: ProviderConfig  # LLM provider, API key, per-task models
//! └── command: Command          # What to run
//! ```
//!
//! All configuration can be provided via CLI arguments or environment variables.
//! Use `--help` to see all available options.
//!
//! # Example
//!
//! ```bash
//! prepmate --chunk-size 300 chunk notes.pdf
//!
//! # Or via environment variables
//! CHUNK_SIZE=300 LLM_API_KEY=... prepmate quiz notes.pdf
//! ```

use std::process;

use anyhow::Context;
use clap::Parser;
use prepmate_rag::RagConfig;
use prepmate_rig::ProviderConfig;

use crate::command::Command;
use crate::{TRACING_TARGET_CONFIG, TRACING_TARGET_STARTUP};

/// Complete CLI configuration.
#[derive(Debug, Clone, Parser)]
#[command(name = "prepmate")]
#[command(about = "Chunk study documents and learn from them with an AI assistant")]
#[command(version)]
pub struct Cli {
    /// Chunking and retrieval configuration.
    #[clap(flatten)]
    pub rag: RagConfig,

    /// Text-generation provider configuration.
    #[clap(flatten)]
    pub provider: ProviderConfig,

    /// Command to run.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Loads environment variables from .env file (if enabled) and parses CLI arguments.
    ///
    /// The .env file is loaded before clap parses arguments, so its values act
    /// as environment defaults.
    pub fn init() -> Self {
        Self::load_dotenv();
        Self::parse()
    }

    #[cfg(feature = "dotenv")]
    fn load_dotenv() {
        if let Err(err) = dotenvy::dotenv()
            && !err.not_found()
        {
            eprintln!("Warning: failed to load .env file: {err}");
        }
    }

    #[cfg(not(feature = "dotenv"))]
    fn load_dotenv() {}

    /// Validates all configuration values.
    ///
    /// Provider settings are only checked for commands that call the
    /// language model, so chunking and search work without an API key.
    pub fn validate(&self) -> anyhow::Result<()> {
        self.rag
            .validate()
            .context("invalid chunking configuration")?;

        if self.command.requires_provider() {
            self.provider
                .validate()
                .context("invalid provider configuration")?;
        }

        Ok(())
    }

    /// Logs configuration at debug level (no sensitive information).
    pub fn log(&self) {
        tracing::debug!(
            target: TRACING_TARGET_STARTUP,
            version = env!("CARGO_PKG_VERSION"),
            pid = process::id(),
            features = ?Self::enabled_features(),
            command = self.command.name(),
            "build information"
        );

        tracing::debug!(
            target: TRACING_TARGET_CONFIG,
            chunk_size = self.rag.chunk_size,
            chunk_overlap = self.rag.chunk_overlap,
            max_chunks = self.rag.max_chunks,
            "chunking configuration"
        );

        if self.command.requires_provider() {
            tracing::debug!(
                target: TRACING_TARGET_CONFIG,
                provider = %self.provider.provider,
                api_key_set = self.provider.api_key.is_some(),
                "provider configuration"
            );
        }
    }

    /// Returns a list of enabled compile-time features.
    fn enabled_features() -> Vec<&'static str> {
        [cfg!(feature = "dotenv").then_some("dotenv")]
            .into_iter()
            .flatten()
            .collect()
    }
}
