//! Error types for the wordsieve library.
//!
//! All errors are represented by the [`SieveError`] enum. Each failure cause
//! has its own variant so that callers can branch on it, either by matching
//! directly or through the [`ErrorKind`] returned by [`SieveError::kind`].
//!
//! # Examples
//!
//! ```
//! use wordsieve::error::{ErrorKind, SieveError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(SieveError::invalid_config("minimum length cannot be negative"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => assert_eq!(e.kind(), ErrorKind::InvalidConfiguration),
//! }
//! ```

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// The main error type for wordsieve operations.
#[derive(Error, Debug)]
pub enum SieveError {
    /// The source identifier was empty or consisted only of whitespace.
    #[error("Invalid source identifier: {0}")]
    InvalidSourceIdentifier(String),

    /// The source does not exist.
    #[error("Source not found: {}", path.display())]
    SourceNotFound { path: PathBuf },

    /// The source exists but could not be opened or read.
    #[error("Source unreadable: {}: {source}", path.display())]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A component was constructed with an invalid configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// I/O errors outside of source reading (config files, output).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Discriminant of a [`SieveError`], convenient for branching on the cause.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidSourceIdentifier,
    SourceNotFound,
    SourceUnreadable,
    InvalidConfiguration,
    Io,
    Json,
}

/// Result type alias for operations that may fail with SieveError.
pub type Result<T> = std::result::Result<T, SieveError>;

impl SieveError {
    /// Create a new invalid source identifier error.
    pub fn invalid_source<S: Into<String>>(msg: S) -> Self {
        SieveError::InvalidSourceIdentifier(msg.into())
    }

    /// Create a new source not found error.
    pub fn not_found<P: Into<PathBuf>>(path: P) -> Self {
        SieveError::SourceNotFound { path: path.into() }
    }

    /// Create a new source unreadable error.
    pub fn unreadable<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        SieveError::SourceUnreadable {
            path: path.into(),
            source,
        }
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        SieveError::InvalidConfiguration(msg.into())
    }

    /// Get the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            SieveError::InvalidSourceIdentifier(_) => ErrorKind::InvalidSourceIdentifier,
            SieveError::SourceNotFound { .. } => ErrorKind::SourceNotFound,
            SieveError::SourceUnreadable { .. } => ErrorKind::SourceUnreadable,
            SieveError::InvalidConfiguration(_) => ErrorKind::InvalidConfiguration,
            SieveError::Io(_) => ErrorKind::Io,
            SieveError::Json(_) => ErrorKind::Json,
        }
    }
}
