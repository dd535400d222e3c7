//! Semantic error types for the command-line runner.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised before any scenario runs.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// An invalid configuration value was provided.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A path given on the command line does not exist.
    #[error("no such file or directory: {}", .0.display())]
    MissingPath(PathBuf),

    /// A directory could not be listed.
    #[error("failed to read directory {}: {source}", .path.display())]
    ReadDir {
        /// Directory being searched.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}
