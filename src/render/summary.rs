//! Compact overview of a loaded container.

use serde::Serialize;

use crate::error::Result;
use crate::model::{LoadStats, XdFile};
use crate::visit::{walk_artboard, ObjectCounter};

use super::json::{serialize, JsonFormat};

/// Per-container overview.
#[derive(Debug, Clone, Serialize)]
pub struct XdFileSummary {
    pub name: Option<String>,
    pub artboard_count: usize,
    pub artboards: Vec<ArtboardSummary>,
    pub stats: LoadStats,
}

/// Per-artboard overview.
#[derive(Debug, Clone, Serialize)]
pub struct ArtboardSummary {
    pub name: Option<String>,
    pub id: Option<String>,
    pub path: Option<String>,
    pub resources: String,
    /// Nodes in the scene graph, nested ones included
    pub object_count: usize,
    pub width: Option<f32>,
    pub height: Option<f32>,
}

impl XdFileSummary {
    /// Serialize the summary.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        serialize(self, format)
    }
}

/// Build an overview of `file`.
pub fn summarize(file: &XdFile) -> XdFileSummary {
    let artboards = file
        .iter()
        .map(|artboard| {
            let mut counter = ObjectCounter::new();
            walk_artboard(artboard, &mut counter);
            let bounds = artboard.bounds();
            ArtboardSummary {
                name: artboard.name().map(str::to_string),
                id: artboard.id().map(str::to_string),
                path: artboard.path().map(str::to_string),
                resources: artboard.resources_path().to_string(),
                object_count: counter.total(),
                width: bounds.map(|b| b.width),
                height: bounds.map(|b| b.height),
            }
        })
        .collect();

    XdFileSummary {
        name: file.manifest().name.clone(),
        artboard_count: file.artboard_count(),
        artboards,
        stats: *file.stats(),
    }
}
