//! Container format detection and validation.

use crate::archive::Archive;
use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Mime type XD containers declare in their `mimetype` entry.
pub const XD_MIME_TYPE: &str = "application/vnd.adobe.sparkler.project+dcxucf";

/// Name of the entry holding the container's mime type.
pub const MIME_TYPE_ENTRY: &str = "mimetype";

/// Zip local file header signature: PK\x03\x04
const ZIP_MAGIC: &[u8] = b"PK\x03\x04";

/// Signature of an empty zip archive (end of central directory only).
const ZIP_EMPTY_MAGIC: &[u8] = b"PK\x05\x06";

/// Container format information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XdFormat {
    /// Whether the archive has no entries at all
    pub empty: bool,
}

impl XdFormat {
    /// Read the declared mime type of an opened container.
    ///
    /// Returns `Ok(None)` when the container has no `mimetype` entry.
    pub fn read_mime_type(archive: &Archive) -> Result<Option<String>> {
        match archive.read_text(MIME_TYPE_ENTRY) {
            Ok(text) => Ok(Some(text.trim().to_string())),
            Err(Error::EntryNotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Check the declared mime type, if any.
    ///
    /// A container without a `mimetype` entry passes; one that declares a
    /// different type fails with [`Error::UnsupportedMimeType`].
    pub fn verify_mime_type(archive: &Archive) -> Result<()> {
        match Self::read_mime_type(archive)? {
            Some(mime) if mime != XD_MIME_TYPE => Err(Error::UnsupportedMimeType(mime)),
            Some(_) => Ok(()),
            None => {
                log::warn!("Container has no mimetype entry; skipping mime type check");
                Ok(())
            }
        }
    }
}

impl std::fmt::Display for XdFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.empty {
            write!(f, "XD container (empty)")
        } else {
            write!(f, "XD container")
        }
    }
}

/// Detect the container format from a file path.
///
/// # Arguments
/// * `path` - Path to the container file
///
/// # Returns
/// * `Ok(XdFormat)` if the file starts with a zip signature
/// * `Err(Error::UnknownFormat)` otherwise
pub fn detect_format_from_path<P: AsRef<Path>>(path: P) -> Result<XdFormat> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut header = Vec::with_capacity(4);
    reader.take(4).read_to_end(&mut header)?;
    detect_format_from_bytes(&header)
}

/// Detect the container format from bytes.
///
/// # Arguments
/// * `data` - Byte slice containing at least the first 4 bytes of the file
pub fn detect_format_from_bytes(data: &[u8]) -> Result<XdFormat> {
    if data.starts_with(ZIP_MAGIC) {
        return Ok(XdFormat { empty: false });
    }
    if data.starts_with(ZIP_EMPTY_MAGIC) {
        return Ok(XdFormat { empty: true });
    }
    Err(Error::UnknownFormat)
}

/// Check if a file looks like a container.
pub fn is_xd<P: AsRef<Path>>(path: P) -> bool {
    detect_format_from_path(path).is_ok()
}

/// Check if bytes look like a container.
pub fn is_xd_bytes(data: &[u8]) -> bool {
    detect_format_from_bytes(data).is_ok()
}
