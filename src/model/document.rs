//! Per-artboard graphic-content document.

use serde::{Deserialize, Serialize};

use super::{ObjectMeta, Style, XdObject};

/// Decoded `graphicContent.agc` of one artboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArtboardDocument {
    pub version: Option<String>,
    pub children: Vec<ArtboardChild>,
    /// Reference to the shared resources document
    pub resources: Option<Href>,
    /// Reference to the artboards index
    pub artboards: Option<Href>,
}

impl ArtboardDocument {
    /// Raw resources reference, if present and not blank.
    pub fn resources_href(&self) -> Option<&str> {
        self.resources
            .as_ref()
            .and_then(|href| href.href.as_deref())
            .filter(|href| !href.trim().is_empty())
    }

    /// First child tagged `artboard` that carries content.
    pub fn content(&self) -> Option<&ArtboardContent> {
        self.children
            .iter()
            .filter(|child| child.kind.as_deref() == Some("artboard"))
            .find_map(|child| child.artboard.as_ref())
    }
}

/// Link to another document inside the container.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Href {
    pub href: Option<String>,
}

/// Top-level entry of an artboard document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArtboardChild {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub id: Option<String>,
    pub meta: Option<ObjectMeta>,
    pub style: Option<Style>,
    pub artboard: Option<ArtboardContent>,
}

/// Scene graph of an artboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArtboardContent {
    pub children: Vec<XdObject>,
    pub meta: Option<ObjectMeta>,
    /// Key into the resources document's artboard map
    #[serde(rename = "ref")]
    pub reference: Option<String>,
}
