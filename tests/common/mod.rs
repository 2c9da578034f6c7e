//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::io::{Cursor, Write};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

pub const SHARED_RESOURCES: &str = "/resources/graphicContent.agc";
pub const SHARED_RESOURCES_ENTRY: &str = "resources/graphicContent.agc";

/// Assembles a container in memory.
#[derive(Default)]
pub struct Container {
    entries: Vec<(String, Vec<u8>)>,
}

impl Container {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entry(mut self, name: &str, data: impl AsRef<[u8]>) -> Self {
        self.entries.push((name.to_string(), data.as_ref().to_vec()));
        self
    }

    pub fn mimetype(self) -> Self {
        self.entry("mimetype", unxd::detect::XD_MIME_TYPE)
    }

    /// Manifest listing `artboards` (path, name) under `artwork`.
    pub fn manifest(self, artboards: &[(&str, &str)]) -> Self {
        let children: Vec<serde_json::Value> = artboards
            .iter()
            .map(|(path, name)| {
                serde_json::json!({"id": format!("id-{}", path), "name": name, "path": path})
            })
            .collect();
        let manifest = serde_json::json!({
            "id": "doc",
            "name": "Design",
            "manifest-format-version": 17,
            "children": [
                {"path": "resources", "id": "res"},
                {"path": "artwork", "children": children}
            ]
        });
        self.entry("manifest", manifest.to_string())
    }

    /// Artboard document with `objects` as its scene graph.
    pub fn artboard(self, path: &str, resources_href: &str, objects: serde_json::Value) -> Self {
        let document = serde_json::json!({
            "version": "1.5.0",
            "children": [{
                "type": "artboard",
                "id": format!("content-{}", path),
                "artboard": {"ref": format!("ref-{}", path), "children": objects}
            }],
            "resources": {"href": resources_href},
            "artboards": {"href": "/artwork/artboards.agc"}
        });
        self.entry(
            &format!("artwork/{}/graphics/graphicContent.agc", path),
            document.to_string(),
        )
    }

    /// Resources document with artboard bounds for `refs`.
    pub fn resources(self, entry: &str, refs: &[&str]) -> Self {
        let artboards: serde_json::Map<String, serde_json::Value> = refs
            .iter()
            .map(|r| {
                (
                    format!("ref-{}", r),
                    serde_json::json!({"name": r, "x": 0, "y": 0, "width": 375, "height": 812}),
                )
            })
            .collect();
        let document = serde_json::json!({
            "version": "1.5.0",
            "resources": {"meta": {"ux": {"symbols": []}}},
            "artboards": artboards
        });
        self.entry(entry, document.to_string())
    }

    pub fn build(self) -> Vec<u8> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);
        for (name, data) in &self.entries {
            writer.start_file(name.as_str(), options).unwrap();
            writer.write_all(data).unwrap();
        }
        writer.finish().unwrap().into_inner()
    }
}

/// Shape node with a pattern fill pointing at `uid`.
pub fn pattern_shape(id: &str, uid: &str) -> serde_json::Value {
    serde_json::json!({
        "type": "shape",
        "id": id,
        "shape": {"type": "rect", "x": 0, "y": 0, "width": 10, "height": 10},
        "style": {"fill": {"type": "pattern", "pattern": {
            "width": 10, "height": 10,
            "meta": {"ux": {"uid": uid, "scaleBehavior": "fill", "hrefLastModifiedDate": 1600000000}}
        }}}
    })
}

/// The two-artboard container sharing one resources document.
pub fn two_boards() -> Vec<u8> {
    Container::new()
        .mimetype()
        .manifest(&[("board1", "Home"), ("board2", "About")])
        .artboard("board1", SHARED_RESOURCES, serde_json::json!([pattern_shape("s1", "img-1")]))
        .artboard("board2", SHARED_RESOURCES, serde_json::json!([]))
        .resources(SHARED_RESOURCES_ENTRY, &["board1", "board2"])
        .entry("resources/img-1", b"\x89PNG\r\n\x1a\nfake")
        .build()
}
