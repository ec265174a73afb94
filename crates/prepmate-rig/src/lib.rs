#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

pub mod assistant;
mod config;
mod error;
pub mod provider;

pub use config::ProviderConfig;
pub use error::{Error, Result};

/// Tracing target for the main library.
pub const TRACING_TARGET: &str = "prepmate_rig";

/// Tracing target for completion provider calls.
pub const TRACING_TARGET_PROVIDER: &str = "prepmate_rig::provider";

/// Tracing target for study assistant operations.
pub const TRACING_TARGET_ASSISTANT: &str = "prepmate_rig::assistant";
