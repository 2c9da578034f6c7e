//! Schema-driven decoding of archive entries.

use serde::de::DeserializeOwned;

use crate::archive::Archive;
use crate::error::{Error, Result};

/// Decode `text` as `T`, reporting failures against `path`.
pub(crate) fn decode<T: DeserializeOwned>(path: &str, text: &str) -> Result<T> {
    serde_json::from_str(text).map_err(|e| Error::format(path, e))
}

/// Read the entry at `path` and decode it as `T`.
///
/// A missing entry is returned as [`Error::EntryNotFound`]; callers decide
/// whether that is fatal in their context. Any other failure to produce the
/// document, invalid UTF-8 included, is an [`Error::Format`] naming `path`.
pub(crate) fn read_document<T: DeserializeOwned>(archive: &Archive, path: &str) -> Result<T> {
    let text = archive.read_text(path).map_err(|e| match e {
        Error::EntryNotFound(_) => e,
        other => Error::format(path, other),
    })?;
    decode(path, &text)
}
