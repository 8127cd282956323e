//! Error types for document operations.

use std::path::PathBuf;

/// Failures surfaced by file I/O and PDF export.
#[derive(Debug, thiserror::Error)]
pub enum DocError {
    /// The file could not be read or was not valid UTF-8.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file could not be written.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Export was requested for a buffer with no visible content.
    #[error("no content to generate PDF")]
    EmptyContent,
}

/// Convenience alias for document results.
pub type Result<T> = std::result::Result<T, DocError>;
