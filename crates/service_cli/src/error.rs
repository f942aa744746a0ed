//! CLI error types.

use thiserror::Error;

/// CLI result alias.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced to the terminal.
#[derive(Error, Debug)]
pub enum CliError {
    /// An argument failed validation beyond what clap can express.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The engine rejected the configuration or an operation.
    #[error(transparent)]
    Engine(#[from] market_engine::EngineError),

    /// Serialising output failed.
    #[error("Failed to serialise output: {0}")]
    Serialise(#[from] serde_json::Error),

    /// A sampler self-check produced a value outside tolerance.
    #[error("Sampler check failed: {0}")]
    CheckFailed(String),
}
