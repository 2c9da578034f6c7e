//! Error types for unxd library.

use std::io;
use thiserror::Error;

/// Result type alias for unxd operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while opening and assembling a container.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Zip-level failure other than a missing entry.
    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// The input is not a zip container.
    #[error("Unknown file format: not a valid XD container")]
    UnknownFormat,

    /// The container declares a different mime type.
    #[error("Unsupported mime type: {0}")]
    UnsupportedMimeType(String),

    /// An expected archive entry is absent.
    #[error("Entry not found: {0}")]
    EntryNotFound(String),

    /// A document failed to decode or lacks a mandatory substructure.
    #[error("Format error in {path}: {message}")]
    Format {
        /// Archive path of the offending document
        path: String,
        /// Underlying cause
        message: String,
    },

    /// A pattern fill references a content id with no binary entry.
    #[error("Resource missing: {0}")]
    ResourceMissing(String),

    /// Entry content is not valid UTF-8.
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Error serializing the parsed graph.
    #[error("Rendering error: {0}")]
    Render(String),
}

impl Error {
    /// Build a format error for `path` from any displayable cause.
    pub fn format(path: impl Into<String>, cause: impl std::fmt::Display) -> Self {
        Error::Format {
            path: path.into(),
            message: cause.to_string(),
        }
    }

    /// Whether this error reports an absent archive entry.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::EntryNotFound(_))
    }
}
