//! Error handling for the CLI application.

use thiserror::Error;

/// CLI-specific error categories. Most errors are propagated through
/// `anyhow` with context; these cover the cases the CLI itself detects.
#[derive(Debug, Error)]
pub enum CliError {
    /// Input file missing or unreadable
    #[error("cannot read input: {0}")]
    Input(String),
    /// Output file cannot be created or written
    #[error("cannot write output: {0}")]
    Output(String),
    /// Invalid combination or value of command-line options
    #[error("invalid option: {0}")]
    Options(String),
}

/// Result type alias for CLI operations.
pub type CliResult<T> = anyhow::Result<T>;
