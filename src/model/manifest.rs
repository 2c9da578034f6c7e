//! Root manifest of a container.

use serde::{Deserialize, Serialize};

/// Path segment of the manifest child that lists the artboards.
pub const ARTWORK_PATH: &str = "artwork";

/// The container's root index document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "manifest-format-version")]
    pub manifest_format_version: i32,
    pub state: Option<String>,
    pub components: Vec<ManifestComponent>,
    pub children: Vec<ManifestChild>,
}

impl Manifest {
    /// Children whose path is `artwork`.
    pub fn artwork_nodes(&self) -> impl Iterator<Item = &ManifestChild> {
        self.children
            .iter()
            .filter(|child| child.path.as_deref() == Some(ARTWORK_PATH))
    }

    /// The single `artwork` child, or `None` if there is not exactly one.
    pub fn artwork(&self) -> Option<&ManifestChild> {
        let mut nodes = self.artwork_nodes();
        let first = nodes.next()?;
        match nodes.next() {
            Some(_) => None,
            None => Some(first),
        }
    }

    /// Artboard descriptors, in manifest order.
    pub fn artboards(&self) -> &[ManifestChild] {
        self.artwork()
            .map(|artwork| artwork.children.as_slice())
            .unwrap_or_default()
    }
}

/// A node of the manifest tree; under `artwork` these describe artboards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManifestChild {
    pub id: Option<String>,
    pub name: Option<String>,
    pub path: Option<String>,
    pub children: Vec<ManifestChild>,
    pub components: Vec<ManifestComponent>,
}

impl ManifestChild {
    /// Archive entry of this artboard's graphic-content document.
    pub fn graphic_content_path(&self) -> String {
        format!(
            "{}/{}/graphics/graphicContent.agc",
            ARTWORK_PATH,
            self.path.as_deref().unwrap_or_default()
        )
    }
}

/// A file component registered in the manifest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManifestComponent {
    pub id: Option<String>,
    pub name: Option<String>,
    pub path: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub state: Option<String>,
    pub rel: Option<String>,
    pub width: f32,
    pub height: f32,
}
