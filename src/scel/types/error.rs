//! Custom error types for the scel-reader crate.

use std::path::PathBuf;
use thiserror::Error;

/// The primary error type for all operations in this crate.
///
/// Only file-level conditions surface here. Anomalies inside the pinyin
/// table or vocabulary section are absorbed by the parsers and reported
/// through a [`DiagnosticSink`](crate::scel::diagnostics::DiagnosticSink).
#[derive(Debug, Error)]
pub enum ScelError {
    /// An error originating from I/O operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The buffer is shorter than the fixed header.
    #[error("File too small: {len} bytes (at least 16 bytes required)")]
    TooSmall { len: usize },

    /// Neither known signature matched. `head` is the first 16 bytes as spaced hex.
    #[error("Invalid .scel signature: {head}")]
    InvalidSignature { head: String },

    /// Batch mode was pointed at something that is not a directory.
    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// Directory traversal failed.
    #[error("Directory walk failed: {0}")]
    Walk(#[from] walkdir::Error),
}

impl ScelError {
    /// Returns `true` for errors that reject the file's format rather than
    /// the environment (bad signature, truncated header).
    pub fn is_format_error(&self) -> bool {
        matches!(self, ScelError::TooSmall { .. } | ScelError::InvalidSignature { .. })
    }
}

/// A convenience `Result` type alias using the crate's `ScelError` type.
pub type Result<T> = std::result::Result<T, ScelError>;
