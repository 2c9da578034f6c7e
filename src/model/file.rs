//! Loaded container and its artboards.

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use serde::Serialize;

use crate::archive::Archive;
use crate::error::Result;
use crate::parser::{resolve_pattern_bytes, CacheStatus, ParseOptions, ResourceCache, XdParser};
use crate::visit::{walk_file, walk_objects, PatternCollector};

use super::{
    ArtboardContent, ArtboardDocument, Manifest, ManifestChild, PatternMeta, ResourceArtboard,
    ResourcesDocument, Style, XdObject,
};

/// An opened design container with every artboard loaded.
///
/// The artboard list is fixed once construction succeeds. The archive stays
/// open for on-demand asset reads and is released when the value is dropped.
#[derive(Debug)]
pub struct XdFile {
    archive: Archive,
    manifest: Manifest,
    artboards: Vec<Artboard>,
    stats: LoadStats,
}

impl XdFile {
    pub(crate) fn new(
        archive: Archive,
        manifest: Manifest,
        artboards: Vec<Artboard>,
        stats: LoadStats,
    ) -> Self {
        Self {
            archive,
            manifest,
            artboards,
            stats,
        }
    }

    /// Open and parse a container file.
    pub fn open<P: AsRef<Path>>(path: P, cache: &ResourceCache) -> Result<Self> {
        XdParser::open(path)?.parse(cache)
    }

    /// Open and parse a container file with custom options.
    pub fn open_with_options<P: AsRef<Path>>(
        path: P,
        cache: &ResourceCache,
        options: ParseOptions,
    ) -> Result<Self> {
        XdParser::open_with_options(path, options)?.parse(cache)
    }

    /// Parse a container held in memory.
    pub fn from_bytes(data: &[u8], cache: &ResourceCache) -> Result<Self> {
        XdParser::from_bytes(data)?.parse(cache)
    }

    /// Artboards in manifest order.
    pub fn artboards(&self) -> &[Artboard] {
        &self.artboards
    }

    /// Iterate over artboards in manifest order.
    pub fn iter(&self) -> std::slice::Iter<'_, Artboard> {
        self.artboards.iter()
    }

    pub fn artboard_count(&self) -> usize {
        self.artboards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artboards.is_empty()
    }

    /// The decoded root manifest.
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// First artboard whose manifest name equals `name`.
    pub fn artboard_by_name(&self, name: &str) -> Option<&Artboard> {
        self.artboards.iter().find(|a| a.name() == Some(name))
    }

    /// Artboard with the given manifest id.
    pub fn artboard_by_id(&self, id: &str) -> Option<&Artboard> {
        self.artboards.iter().find(|a| a.id() == Some(id))
    }

    /// Counters collected while loading.
    pub fn stats(&self) -> &LoadStats {
        &self.stats
    }

    /// The underlying archive.
    pub fn archive(&self) -> &Archive {
        &self.archive
    }

    /// Raw bytes of the asset a pattern fill points at.
    ///
    /// Returns `Ok(None)` when there is no usable reference and
    /// [`Error::ResourceMissing`](crate::Error::ResourceMissing) when the
    /// reference names an asset the archive lacks. Bytes are read afresh on
    /// every call.
    pub fn resource_bytes(&self, meta: Option<&PatternMeta>) -> Result<Option<Vec<u8>>> {
        resolve_pattern_bytes(&self.archive, meta)
    }

    /// Asset bytes of a style's pattern fill, if it has one.
    pub fn pattern_bytes(&self, style: &Style) -> Result<Option<Vec<u8>>> {
        self.resource_bytes(style.pattern().and_then(|pattern| pattern.meta.as_ref()))
    }

    /// Distinct pattern-fill references reachable from the artboards and the
    /// symbol libraries of their resources documents.
    pub fn pattern_metas(&self) -> Vec<&PatternMeta> {
        let mut collector = PatternCollector::new();
        walk_file(self, &mut collector);

        let mut seen = HashSet::new();
        for artboard in &self.artboards {
            let resources = artboard.resources_arc();
            if seen.insert(Arc::as_ptr(resources)) {
                walk_objects(resources.symbols(), &mut collector, 0);
            }
        }

        collector.into_metas()
    }
}

impl<'a> IntoIterator for &'a XdFile {
    type Item = &'a Artboard;
    type IntoIter = std::slice::Iter<'a, Artboard>;

    fn into_iter(self) -> Self::IntoIter {
        self.artboards.iter()
    }
}

/// One artboard: its manifest entry, its document and the shared resources
/// document it references.
#[derive(Debug, Clone)]
pub struct Artboard {
    manifest: ManifestChild,
    document: ArtboardDocument,
    resources_path: String,
    resources: Arc<ResourcesDocument>,
}

impl Artboard {
    pub(crate) fn new(
        manifest: ManifestChild,
        document: ArtboardDocument,
        resources_path: String,
        resources: Arc<ResourcesDocument>,
    ) -> Self {
        Self {
            manifest,
            document,
            resources_path,
            resources,
        }
    }

    /// Display name from the manifest.
    pub fn name(&self) -> Option<&str> {
        self.manifest.name.as_deref()
    }

    pub fn id(&self) -> Option<&str> {
        self.manifest.id.as_deref()
    }

    /// Path segment under `artwork/`.
    pub fn path(&self) -> Option<&str> {
        self.manifest.path.as_deref()
    }

    /// The manifest entry describing this artboard.
    pub fn manifest(&self) -> &ManifestChild {
        &self.manifest
    }

    pub fn document(&self) -> &ArtboardDocument {
        &self.document
    }

    /// Normalized archive path of the resources document.
    pub fn resources_path(&self) -> &str {
        &self.resources_path
    }

    pub fn resources(&self) -> &ResourcesDocument {
        &self.resources
    }

    /// Shared handle to the resources document.
    pub fn resources_arc(&self) -> &Arc<ResourcesDocument> {
        &self.resources
    }

    /// Scene graph of the artboard, if the document has one.
    pub fn content(&self) -> Option<&ArtboardContent> {
        self.document.content()
    }

    /// Top-level scene-graph nodes.
    pub fn objects(&self) -> &[XdObject] {
        self.content()
            .map(|content| content.children.as_slice())
            .unwrap_or_default()
    }

    /// Canvas placement recorded in the resources document.
    pub fn bounds(&self) -> Option<&ResourceArtboard> {
        let reference = self.content()?.reference.as_deref()?;
        self.resources.artboard(reference)
    }
}

/// Counters collected while loading a container.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadStats {
    /// Artboards loaded
    pub artboards: usize,
    /// Resources documents decoded by this load
    pub resources_decoded: usize,
    /// Artboards served a resources document already in the cache
    pub cache_hits: usize,
}

impl LoadStats {
    pub(crate) fn record(&mut self, status: CacheStatus) {
        self.artboards += 1;
        match status {
            CacheStatus::Hit => self.cache_hits += 1,
            CacheStatus::Miss => self.resources_decoded += 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::ZipBuilder;
    use crate::Error;

    const BOARD: &str = r#"{
        "children": [{"type": "artboard", "artboard": {"ref": "ab-1", "children": [
            {"type": "shape", "id": "s1", "style": {"fill": {"type": "pattern",
                "pattern": {"width": 10, "height": 10, "meta": {"ux": {"uid": "img-1"}}}}}},
            {"type": "group", "id": "g1", "group": {"children": [
                {"type": "shape", "id": "s2", "style": {"fill": {"type": "pattern",
                    "pattern": {"meta": {"ux": {"uid": "img-1"}}}}}},
                {"type": "shape", "id": "s3", "style": {"fill": {"type": "pattern",
                    "pattern": {"meta": {"ux": {"uid": "  "}}}}}}
            ]}}
        ]}}],
        "resources": {"href": "/resources/graphicContent.agc"}
    }"#;

    const RESOURCES: &str = r#"{
        "resources": {"meta": {"ux": {"symbols": [
            {"type": "shape", "id": "sym", "style": {"fill": {"type": "pattern",
                "pattern": {"meta": {"ux": {"uid": "img-2"}}}}}}
        ]}}},
        "artboards": {"ab-1": {"name": "Home", "width": 375, "height": 812}}
    }"#;

    fn sample() -> XdFile {
        let data = ZipBuilder::new()
            .manifest(&["home"])
            .entry("artwork/home/graphics/graphicContent.agc", BOARD)
            .entry("resources/graphicContent.agc", RESOURCES)
            .entry("resources/img-1", [1u8, 2, 3])
            .build();
        XdFile::from_bytes(&data, &ResourceCache::new()).unwrap()
    }

    #[test]
    fn test_artboard_accessors() {
        let file = sample();
        let artboard = &file.artboards()[0];

        assert_eq!(artboard.name(), Some("Name home"));
        assert_eq!(artboard.id(), Some("id-home"));
        assert_eq!(artboard.resources_path(), "resources/graphicContent.agc");
        assert_eq!(artboard.objects().len(), 2);
        assert_eq!(artboard.bounds().unwrap().width, 375.0);
        assert_eq!(artboard.resources().symbols().len(), 1);

        assert!(file.artboard_by_name("Name home").is_some());
        assert!(file.artboard_by_id("id-home").is_some());
        assert!(file.artboard_by_id("nope").is_none());
        assert_eq!((&file).into_iter().count(), 1);
    }

    #[test]
    fn test_pattern_bytes() {
        let file = sample();
        let shape = &file.artboards()[0].objects()[0];
        let bytes = file.pattern_bytes(shape.style.as_ref().unwrap()).unwrap();
        assert_eq!(bytes, Some(vec![1, 2, 3]));

        assert_eq!(file.pattern_bytes(&Style::default()).unwrap(), None);
        assert_eq!(file.resource_bytes(None).unwrap(), None);
    }

    #[test]
    fn test_pattern_metas_are_distinct() {
        let file = sample();
        let uids: Vec<&str> = file
            .pattern_metas()
            .into_iter()
            .filter_map(PatternMeta::uid)
            .collect();
        assert_eq!(uids, vec!["img-1", "img-2"]);
    }

    #[test]
    fn test_dangling_symbol_pattern() {
        let file = sample();
        let metas = file.pattern_metas();
        let err = file.resource_bytes(Some(metas[1])).unwrap_err();
        assert!(matches!(err, Error::ResourceMissing(ref uid) if uid == "img-2"));
    }

    #[test]
    fn test_load_stats_record() {
        let mut stats = LoadStats::default();
        stats.record(CacheStatus::Miss);
        stats.record(CacheStatus::Hit);
        stats.record(CacheStatus::Hit);
        assert_eq!(
            stats,
            LoadStats {
                artboards: 3,
                resources_decoded: 1,
                cache_hits: 2
            }
        );
    }
}
