//! Rendering module for exporting loaded containers.

mod json;
mod summary;

pub use json::{to_json, JsonFormat};
pub use summary::{summarize, ArtboardSummary, XdFileSummary};
