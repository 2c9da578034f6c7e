//! In-memory container fixtures for unit tests.

use std::io::{Cursor, Write};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Builds a zip archive entry by entry.
#[derive(Default)]
pub(crate) struct ZipBuilder {
    entries: Vec<(String, Vec<u8>)>,
}

impl ZipBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn entry(mut self, name: &str, data: impl AsRef<[u8]>) -> Self {
        self.entries.push((name.to_string(), data.as_ref().to_vec()));
        self
    }

    /// Manifest whose `artwork` node lists the given artboard paths.
    pub(crate) fn manifest(self, artboards: &[&str]) -> Self {
        let children: Vec<String> = artboards
            .iter()
            .map(|path| {
                format!(
                    r#"{{"id":"id-{path}","name":"Name {path}","path":"{path}"}}"#,
                    path = path
                )
            })
            .collect();
        let manifest = format!(
            r#"{{"id":"doc","name":"Doc","manifest-format-version":17,"children":[{{"path":"artwork","children":[{}]}}]}}"#,
            children.join(",")
        );
        self.entry("manifest", manifest)
    }

    /// Artboard document for `path` pointing at `resources_href`.
    pub(crate) fn artboard(self, path: &str, resources_href: &str) -> Self {
        let document = format!(
            r#"{{"version":"1.5.0","children":[{{"type":"artboard","id":"c-{path}","artboard":{{"ref":"ref-{path}","children":[]}}}}],"resources":{{"href":"{href}"}},"artboards":{{"href":"/artwork/artboards.agc"}}}}"#,
            path = path,
            href = resources_href
        );
        self.entry(
            &format!("artwork/{}/graphics/graphicContent.agc", path),
            document,
        )
    }

    /// Minimal resources document at `path`.
    pub(crate) fn resources(self, path: &str) -> Self {
        self.entry(
            path,
            r#"{"version":"1.5.0","resources":{"meta":{"ux":{"symbols":[]}}},"artboards":{}}"#,
        )
    }

    pub(crate) fn build(self) -> Vec<u8> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);
        for (name, data) in &self.entries {
            writer.start_file(name.as_str(), options).unwrap();
            writer.write_all(data).unwrap();
        }
        writer.finish().unwrap().into_inner()
    }
}
