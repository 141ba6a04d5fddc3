//! Library error types

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocError {
    #[error("Unknown text encoding: {0}")]
    UnknownEncoding(String),

    #[error("Cannot determine script type of {}", .0.display())]
    UnknownScriptType(PathBuf),

    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("Invalid exclude pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },
}
