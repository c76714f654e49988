//! Error types for Folio.
//!
//! Errors fall into two scopes:
//!
//! - **Document-scoped** ([`Error::Format`], [`Error::Schema`]): one markdown
//!   document could not be turned into a project. The loader logs these and
//!   moves on to the next document.
//! - **Batch-scoped** (everything else): the source of documents itself is
//!   unusable, so a whole catalog reload is abandoned.

use std::path::{Path, PathBuf};
use std::time::Duration;

/// Result type alias for Folio operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading, parsing, and cataloguing projects.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The text has no well-formed `---` frontmatter block.
    #[error("Format error: {message}")]
    Format {
        /// What was wrong with the document shape
        message: String,
    },

    /// Frontmatter parsed, but a required field is missing or has the wrong type.
    #[error("Schema error: field '{field}' {message}")]
    Schema {
        /// Frontmatter key that failed validation
        field: String,
        /// What went wrong
        message: String,
    },

    /// The document source cannot enumerate or fetch documents.
    #[error("Source unavailable: {message}")]
    SourceUnavailable {
        /// Human-readable error message
        message: String,
        /// Underlying error if available
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O error with the path that caused it.
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// Path being read or written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A source call or state wait did not complete in time.
    #[error("Timed out after {limit:?}")]
    Timeout {
        /// The limit that was exceeded
        limit: Duration,
    },

    /// Configuration error.
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },

    /// Lookup by identifier found nothing.
    #[error("{kind} not found: {id}")]
    NotFound {
        /// Identifier that was looked up
        id: String,
        /// What kind of thing was looked up
        kind: String,
    },
}

impl Error {
    /// Returns whether this error only concerns a single document.
    ///
    /// Document-scoped errors are recovered by skipping the document;
    /// all others abort the batch they occur in.
    pub fn is_document_scoped(&self) -> bool {
        match self {
            Error::Format { .. } | Error::Schema { .. } => true,
            Error::SourceUnavailable { .. } => false,
            Error::Io { .. } => false,
            Error::Timeout { .. } => false,
            Error::Config { .. } => false,
            Error::NotFound { .. } => false,
        }
    }

    /// Creates a new format error.
    pub fn format<S: Into<String>>(message: S) -> Self {
        Error::Format {
            message: message.into(),
        }
    }

    /// Creates a new schema error for a frontmatter field.
    pub fn schema<F, M>(field: F, message: M) -> Self
    where
        F: Into<String>,
        M: Into<String>,
    {
        Error::Schema {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Creates a new source-unavailable error.
    pub fn source_unavailable<S: Into<String>>(message: S) -> Self {
        Error::SourceUnavailable {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new source-unavailable error wrapping an underlying error.
    pub fn source_unavailable_with<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Error::SourceUnavailable {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Wraps an I/O error with the path it happened at.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Error::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Creates a new timeout error.
    pub fn timeout(limit: Duration) -> Self {
        Error::Timeout { limit }
    }

    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Creates a new not-found error.
    pub fn not_found<I, K>(id: I, kind: K) -> Self
    where
        I: Into<String>,
        K: Into<String>,
    {
        Error::NotFound {
            id: id.into(),
            kind: kind.into(),
        }
    }
}
