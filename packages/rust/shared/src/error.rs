//! Error types for docshard.
//!
//! Library crates use [`ShardError`] via `thiserror`.
//! The CLI wraps this with `color-eyre` for rich diagnostics.
//!
//! The sharding engine itself is total — it produces a valid output set for
//! any UTF-8 input — so errors only arise at the I/O boundary.

use std::path::PathBuf;

/// Top-level error type for all docshard operations.
#[derive(Debug, thiserror::Error)]
pub enum ShardError {
    /// Configuration loading or validation error.
    #[error("config error: {message}")]
    Config { message: String },

    /// The source document could not be read. Fatal: no output is emitted.
    #[error("cannot read source {path:?}: {source}")]
    Source {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The destination sink rejected a write. Output content is deterministic,
    /// so re-issuing the write for the failed file is safe.
    #[error("cannot write {path:?}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Data validation error (bad document entry, invalid destination, etc.).
    #[error("validation error: {message}")]
    Validation { message: String },
}

/// Convenience alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, ShardError>;

impl ShardError {
    /// Create a config error from any displayable message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Create a validation error from any displayable message.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
        }
    }

    /// Wrap a read failure with the offending path.
    pub fn source_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Source {
            path: path.into(),
            source,
        }
    }

    /// Wrap a write failure with the offending path.
    pub fn write_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}
