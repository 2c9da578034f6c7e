//! Shared resources document: symbols, gradients, clip paths, artboard bounds.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::XdObject;

/// Decoded resources document, shared by one or more artboards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourcesDocument {
    pub version: Option<String>,
    pub children: Vec<Value>,
    pub resources: Option<ResourceLibrary>,
    /// Artboard bounds keyed by artboard reference
    pub artboards: HashMap<String, ResourceArtboard>,
}

impl ResourcesDocument {
    /// Library symbols (component masters).
    pub fn symbols(&self) -> &[XdObject] {
        self.ux()
            .map(|ux| ux.symbols.as_slice())
            .unwrap_or_default()
    }

    /// Find a symbol by its `symbolId` or `id`.
    pub fn symbol(&self, symbol_id: &str) -> Option<&XdObject> {
        self.symbols().iter().find(|symbol| {
            symbol.ux().and_then(|ux| ux.symbol_id.as_deref()) == Some(symbol_id)
                || symbol.id.as_deref() == Some(symbol_id)
        })
    }

    /// Bounds of an artboard by reference.
    pub fn artboard(&self, reference: &str) -> Option<&ResourceArtboard> {
        self.artboards.get(reference)
    }

    fn ux(&self) -> Option<&ResourceMetaUx> {
        self.resources
            .as_ref()
            .and_then(|library| library.meta.as_ref())
            .and_then(|meta| meta.ux.as_ref())
    }
}

/// `resources` block of the resources document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResourceLibrary {
    pub meta: Option<ResourceMeta>,
    pub gradients: Option<Value>,
    pub clip_paths: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceMeta {
    pub ux: Option<ResourceMetaUx>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResourceMetaUx {
    pub color_swatches: Vec<Value>,
    pub document_library: Option<DocumentLibrary>,
    pub grid_defaults: Option<Value>,
    pub symbols: Vec<XdObject>,
    pub symbols_metadata: Option<SymbolsMetadata>,
}

/// Document-level asset library.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DocumentLibrary {
    pub version: i32,
    pub is_sticker_sheet: bool,
    pub hashed_metadata: Option<Value>,
    pub elements: Vec<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SymbolsMetadata {
    pub using_nested_symbol_syncing: bool,
}

/// Placement of an artboard on the canvas.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResourceArtboard {
    pub name: Option<String>,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub viewport_height: f32,
}
