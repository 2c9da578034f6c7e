//! JSON export of a loaded container.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::model::{ArtboardDocument, LoadStats, Manifest, ResourcesDocument, XdFile};

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

#[derive(Serialize)]
struct FileView<'a> {
    manifest: &'a Manifest,
    artboards: Vec<ArtboardView<'a>>,
    /// Each shared resources document appears once, keyed by path.
    resources: BTreeMap<&'a str, &'a ResourcesDocument>,
    stats: &'a LoadStats,
}

#[derive(Serialize)]
struct ArtboardView<'a> {
    name: Option<&'a str>,
    id: Option<&'a str>,
    path: Option<&'a str>,
    resources: &'a str,
    document: &'a ArtboardDocument,
}

/// Convert a loaded container to JSON.
pub fn to_json(file: &XdFile, format: JsonFormat) -> Result<String> {
    let view = FileView {
        manifest: file.manifest(),
        artboards: file
            .iter()
            .map(|artboard| ArtboardView {
                name: artboard.name(),
                id: artboard.id(),
                path: artboard.path(),
                resources: artboard.resources_path(),
                document: artboard.document(),
            })
            .collect(),
        resources: file
            .iter()
            .map(|artboard| (artboard.resources_path(), artboard.resources()))
            .collect(),
        stats: file.stats(),
    };

    serialize(&view, format)
}

pub(crate) fn serialize<T: Serialize>(value: &T, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(value),
        JsonFormat::Compact => serde_json::to_string(value),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}
