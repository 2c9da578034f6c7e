//! Container parser: manifest walk and artboard assembly.

use std::io::Read;
use std::path::Path;

use rayon::prelude::*;

use crate::archive::Archive;
use crate::detect::XdFormat;
use crate::error::{Error, Result};
use crate::model::{
    Artboard, ArtboardDocument, LoadStats, Manifest, ManifestChild, ResourcesDocument, XdFile,
    ARTWORK_PATH,
};

use super::cache::{normalize_resource_path, CacheStatus, ResourceCache};
use super::decode::read_document;
use super::options::ParseOptions;

/// Archive entry of the root manifest.
pub const MANIFEST_PATH: &str = "manifest";

/// Container parser.
///
/// Opening acquires the archive; [`XdParser::parse`] moves it into the
/// resulting [`XdFile`]. If parsing fails the archive is released with the
/// parser.
pub struct XdParser {
    archive: Archive,
    options: ParseOptions,
}

impl XdParser {
    /// Open a container file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_options(path, ParseOptions::default())
    }

    /// Open a container file with custom options.
    pub fn open_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Self> {
        Self::from_archive(Archive::open(path)?, options)
    }

    /// Open a container from bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Self::from_bytes_with_options(data, ParseOptions::default())
    }

    /// Open a container from bytes with custom options.
    pub fn from_bytes_with_options(data: &[u8], options: ParseOptions) -> Result<Self> {
        Self::from_archive(Archive::from_bytes(data.to_vec())?, options)
    }

    /// Open a container from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::from_reader_with_options(reader, ParseOptions::default())
    }

    /// Open a container from a reader with custom options.
    pub fn from_reader_with_options<R: Read>(mut reader: R, options: ParseOptions) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_archive(Archive::from_bytes(data)?, options)
    }

    /// Wrap an already opened archive.
    pub fn from_archive(archive: Archive, options: ParseOptions) -> Result<Self> {
        if options.verify_mime_type {
            XdFormat::verify_mime_type(&archive)?;
        }
        Ok(Self { archive, options })
    }

    /// The underlying archive.
    pub fn archive(&self) -> &Archive {
        &self.archive
    }

    /// Read and decode the root manifest.
    pub fn read_manifest(&self) -> Result<Manifest> {
        read_document(&self.archive, MANIFEST_PATH)
    }

    /// Parse the container, resolving resources documents through `cache`.
    ///
    /// Every artboard listed under the manifest's `artwork` node is loaded
    /// before this returns. The first failure aborts the whole parse.
    pub fn parse(self, cache: &ResourceCache) -> Result<XdFile> {
        let manifest = self.read_manifest()?;
        let descriptors = artwork_children(&manifest)?;

        log::debug!(
            "Loading {} artboards ({})",
            descriptors.len(),
            if self.options.parallel { "parallel" } else { "sequential" }
        );

        let loaded: Vec<(Artboard, CacheStatus)> = if self.options.parallel {
            // Collect every outcome first so the reported error is the
            // earliest one in manifest order.
            let outcomes: Vec<Result<(Artboard, CacheStatus)>> = descriptors
                .par_iter()
                .map(|child| self.load_artboard(child, cache))
                .collect();
            outcomes.into_iter().collect::<Result<_>>()?
        } else {
            descriptors
                .iter()
                .map(|child| self.load_artboard(child, cache))
                .collect::<Result<_>>()?
        };

        let mut stats = LoadStats::default();
        let mut artboards = Vec::with_capacity(loaded.len());
        for (artboard, status) in loaded {
            stats.record(status);
            artboards.push(artboard);
        }

        log::debug!(
            "Loaded {} artboards, {} resources documents decoded, {} cache hits",
            stats.artboards,
            stats.resources_decoded,
            stats.cache_hits
        );

        Ok(XdFile::new(self.archive, manifest, artboards, stats))
    }

    /// Load one artboard document and attach its resources document.
    fn load_artboard(
        &self,
        child: &ManifestChild,
        cache: &ResourceCache,
    ) -> Result<(Artboard, CacheStatus)> {
        let entry = child.graphic_content_path();
        log::debug!("Loading artboard {}", entry);

        // A missing artboard document is a malformed container, not a lookup miss.
        let document: ArtboardDocument =
            read_document(&self.archive, &entry).map_err(|e| match e {
                Error::Format { .. } => e,
                other => Error::format(&entry, other),
            })?;

        let href = document
            .resources_href()
            .ok_or_else(|| Error::format(&entry, "missing resources reference"))?;
        let resources_path = normalize_resource_path(href).to_string();

        let (resources, status) = cache
            .get_or_load(&resources_path, |path| {
                read_document::<ResourcesDocument>(&self.archive, path)
            })
            .map_err(|e| Error::format(&entry, format!("resources {}: {}", resources_path, e)))?;

        Ok((
            Artboard::new(child.clone(), document, resources_path, resources),
            status,
        ))
    }
}

/// Artboard descriptors under the single `artwork` node.
fn artwork_children(manifest: &Manifest) -> Result<&[ManifestChild]> {
    match manifest.artwork_nodes().count() {
        0 => Err(Error::format(
            MANIFEST_PATH,
            format!("missing `{}` child", ARTWORK_PATH),
        )),
        1 => Ok(manifest.artboards()),
        n => Err(Error::format(
            MANIFEST_PATH,
            format!("expected one `{}` child, found {}", ARTWORK_PATH, n),
        )),
    }
}
