//! On-demand resolution of pattern-fill assets to raw bytes.

use crate::archive::Archive;
use crate::error::{Error, Result};
use crate::model::PatternMeta;

/// Directory holding binary assets inside the container.
pub const RESOURCE_DIR: &str = "resources";

/// Archive entry of the asset with content id `uid`.
pub fn resource_entry_path(uid: &str) -> String {
    format!("{}/{}", RESOURCE_DIR, uid)
}

/// Fetch the bytes a pattern fill refers to.
///
/// Returns `Ok(None)` when there is nothing to resolve: no metadata, no UX
/// block, or a missing or blank content id. A content id without a matching
/// entry is an error ([`Error::ResourceMissing`]). Results are not cached;
/// every call reads the archive again.
pub fn resolve_pattern_bytes(archive: &Archive, meta: Option<&PatternMeta>) -> Result<Option<Vec<u8>>> {
    let Some(uid) = meta.and_then(PatternMeta::uid) else {
        return Ok(None);
    };

    match archive.read_bytes(&resource_entry_path(uid)) {
        Ok(bytes) => Ok(Some(bytes)),
        Err(Error::EntryNotFound(_)) => Err(Error::ResourceMissing(uid.to_string())),
        Err(e) => Err(e),
    }
}
