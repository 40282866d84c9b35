//! Error types for locslib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during a scan
#[derive(Error, Debug)]
pub enum LocsError {
    /// Failed to read a matched source file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to create or write the extraction output file
    #[error("failed to write '{path}': {source}")]
    SinkWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Invalid glob pattern in a scan root
    #[error("invalid glob pattern '{pattern}': {message}")]
    InvalidGlob { pattern: String, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
