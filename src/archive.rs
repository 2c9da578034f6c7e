//! Random-access entry store over the container's zip archive.
//!
//! The archive is opened read-only. Entries are looked up by their exact
//! path; an absent entry is reported as [`Error::EntryNotFound`] and nothing
//! else about the content is interpreted here.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Cursor, Read, Seek};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use zip::result::ZipError;
use zip::ZipArchive;

use crate::detect::{detect_format_from_bytes, detect_format_from_path};
use crate::error::{Error, Result};

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Byte stream the zip reader can seek over.
trait ReadSeek: Read + Seek + Send {}

impl<T: Read + Seek + Send> ReadSeek for T {}

struct Inner {
    zip: ZipArchive<Box<dyn ReadSeek>>,
    reads: HashMap<String, u32>,
}

/// Read-only handle on a container archive.
///
/// Reads go through an internal mutex, so a shared `&Archive` may be used
/// from several threads; concurrent reads are serialized.
pub struct Archive {
    inner: Mutex<Inner>,
    source: Option<PathBuf>,
}

impl Archive {
    /// Open a container file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        // Verify it's a zip container
        detect_format_from_path(path)?;

        let file = File::open(path)?;
        let reader: Box<dyn ReadSeek> = Box::new(BufReader::new(file));
        let mut archive = Self::from_reader(reader)?;
        archive.source = Some(path.to_path_buf());
        log::debug!("Opened container {}", path.display());
        Ok(archive)
    }

    /// Open a container held in memory.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        detect_format_from_bytes(&data)?;
        let reader: Box<dyn ReadSeek> = Box::new(Cursor::new(data));
        Self::from_reader(reader)
    }

    fn from_reader(reader: Box<dyn ReadSeek>) -> Result<Self> {
        let zip = ZipArchive::new(reader)?;
        Ok(Self {
            inner: Mutex::new(Inner {
                zip,
                reads: HashMap::new(),
            }),
            source: None,
        })
    }

    /// Path the archive was opened from, if it came from disk.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Read an entry and decode it as UTF-8 text.
    ///
    /// A leading byte order mark is dropped.
    pub fn read_text(&self, path: &str) -> Result<String> {
        let bytes = self.read_bytes(path)?;
        let bytes = if bytes.starts_with(UTF8_BOM) {
            bytes[UTF8_BOM.len()..].to_vec()
        } else {
            bytes
        };
        String::from_utf8(bytes).map_err(|e| Error::Encoding(format!("{}: {}", path, e)))
    }

    /// Read an entry as raw bytes.
    pub fn read_bytes(&self, path: &str) -> Result<Vec<u8>> {
        let mut inner = self.lock();
        let Inner { zip, reads } = &mut *inner;

        let mut file = match zip.by_name(path) {
            Ok(file) => file,
            Err(ZipError::FileNotFound) => {
                log::trace!("Entry not found: {}", path);
                return Err(Error::EntryNotFound(path.to_string()));
            }
            Err(e) => return Err(e.into()),
        };

        let mut contents = Vec::with_capacity(file.size() as usize);
        file.read_to_end(&mut contents)?;
        *reads.entry(path.to_string()).or_insert(0) += 1;

        log::trace!("Read entry {} ({} bytes)", path, contents.len());
        Ok(contents)
    }

    /// Check whether an entry exists at exactly `path`.
    pub fn contains(&self, path: &str) -> bool {
        self.lock().zip.file_names().any(|name| name == path)
    }

    /// Names of all entries, in central directory order.
    pub fn entry_names(&self) -> Vec<String> {
        self.lock().zip.file_names().map(str::to_string).collect()
    }

    /// Number of entries in the archive.
    pub fn len(&self) -> usize {
        self.lock().zip.len()
    }

    /// Check if the archive has no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// How many times the entry at `path` has been read successfully.
    pub fn read_count(&self, path: &str) -> u32 {
        self.lock().reads.get(path).copied().unwrap_or(0)
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // A panic mid-read leaves the zip index intact.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for Archive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Archive")
            .field("source", &self.source)
            .field("entries", &self.len())
            .finish()
    }
}
