//! Typed views of the documents inside a design container.
//!
//! The container holds a root [`Manifest`], one [`ArtboardDocument`] per
//! artboard and shared [`ResourcesDocument`]s. Each schema type decodes with
//! `serde`: unknown keys are ignored and absent keys take their defaults.
//! [`XdFile`] ties them together once a container is loaded.

mod document;
mod file;
mod geometry;
mod manifest;
mod object;
mod resources;
mod style;

pub use document::{ArtboardChild, ArtboardContent, ArtboardDocument, Href};
pub use file::{Artboard, LoadStats, XdFile};
pub use geometry::{Size, Transform};
pub use manifest::{Manifest, ManifestChild, ManifestComponent, ARTWORK_PATH};
pub use object::{
    ClipPathResources, Group, Interaction, InteractionData, InteractionDetail,
    InteractionProperties, ObjectKind, ObjectMeta, ObjectMetaUx, RepeatGrid, Shape, Text,
    TextFrame, TextLine, TextParagraph, XdObject,
};
pub use resources::{
    DocumentLibrary, ResourceArtboard, ResourceLibrary, ResourceMeta, ResourceMetaUx,
    ResourcesDocument, SymbolsMetadata,
};
pub use style::{
    Color, ColorValue, Fill, Font, Pattern, PatternMeta, PatternMetaUx, Stroke, Style,
    TextAttributes,
};
