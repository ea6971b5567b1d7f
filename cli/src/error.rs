//! Error types for the CLI

use mapgen_core::MapgenError;
use thiserror::Error;

use crate::config::ConfigError;

/// CLI errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(String),

    /// Metadata file could not be read or parsed
    #[error("Invalid metadata: {0}")]
    Input(String),

    /// Generation failed for a table
    #[error("Generation error: {0}")]
    Generate(#[from] MapgenError),

    /// Other errors
    #[error("{0}")]
    Other(String),
}
