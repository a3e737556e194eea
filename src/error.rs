//! Error types for retag

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Result type for retag operations
pub type Result<T> = std::result::Result<T, RetagError>;

/// retag error types
#[derive(Error, Debug)]
pub enum RetagError {
    #[error("{0} must be set")]
    MissingFlag(&'static str),

    #[error("Failed to read image list {}: {source}", .path.display())]
    ListRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to launch {program}: {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` failed: {status}")]
    CommandFailed { command: String, status: ExitStatus },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
