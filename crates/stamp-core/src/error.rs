// crates/stamp-core/src/error.rs - Error Types
//
// Every fallible operation in the core library returns `StampResult<T>`.
// The variants line up with how the CLI reports a failure:
// - Usage: print the message and the help text, exit non-zero
// - ConfigCorrupt: warn and carry on with an empty config
// - NotFound / Io / MalformedPage: print the message, exit non-zero

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while routing commands or touching notebook files
#[derive(Error, Debug)]
pub enum StampError {
    #[error("{0}")]
    Usage(String),

    #[error("config file {} is not valid JSON: {reason}", path.display())]
    ConfigCorrupt { path: PathBuf, reason: String },

    #[error("{0}")]
    NotFound(String),

    #[error("I/O error on {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}: malformed record at line {line}: {reason}", path.display())]
    MalformedPage {
        path: PathBuf,
        line: usize,
        reason: String,
    },
}

/// Result type for stamp operations
pub type StampResult<T> = Result<T, StampError>;

impl StampError {
    /// Shorthand for a usage error
    pub fn usage<S: Into<String>>(message: S) -> Self {
        Self::Usage(message.into())
    }

    /// Wrap an I/O error with the path it happened on
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Whether the help text should accompany this error
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::Usage(_))
    }
}
