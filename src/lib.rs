//! # unxd
//!
//! Reader for XD design containers.
//!
//! A container is a zip archive holding a JSON manifest, one graphic-content
//! document per artboard, shared resources documents and binary assets. This
//! library opens the archive, loads every artboard with its resources
//! document and reads pattern-fill assets on demand.
//!
//! ## Quick Start
//!
//! ```no_run
//! use unxd::{parse_file, render};
//!
//! fn main() -> unxd::Result<()> {
//!     let file = parse_file("design.xd")?;
//!
//!     for artboard in file.artboards() {
//!         println!("{:?}: {} nodes", artboard.name(), artboard.objects().len());
//!     }
//!
//!     let json = render::to_json(&file, render::JsonFormat::Pretty)?;
//!     println!("{}", json);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Shared resources**: artboards referencing the same resources document
//!   share one decoded copy through a [`ResourceCache`]
//! - **Asset access**: pattern-fill images resolved to raw bytes on demand
//! - **Parallel loading**: optional Rayon-based artboard loading
//! - **Traversal**: [`visit`] walks scene graphs depth-first

pub mod archive;
pub mod detect;
pub mod error;
pub mod model;
pub mod parser;
pub mod render;
pub mod visit;

#[cfg(test)]
mod test_helpers;

// Re-export commonly used types
pub use archive::Archive;
pub use detect::{detect_format_from_bytes, detect_format_from_path, is_xd, XdFormat};
pub use error::{Error, Result};
pub use model::{
    Artboard, ArtboardDocument, LoadStats, Manifest, ObjectKind, PatternMeta, ResourcesDocument,
    Style, XdFile, XdObject,
};
pub use parser::{ParseOptions, ResourceCache, XdParser};
pub use render::JsonFormat;

use std::io::Read;
use std::path::Path;
use std::sync::Arc;

/// Parse a container file with a fresh resource cache.
///
/// # Example
///
/// ```no_run
/// use unxd::parse_file;
///
/// let file = parse_file("design.xd").unwrap();
/// println!("Artboards: {}", file.artboard_count());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<XdFile> {
    parse_file_with_cache(path, &ResourceCache::new())
}

/// Parse a container file with custom options.
///
/// # Example
///
/// ```no_run
/// use unxd::{parse_file_with_options, ParseOptions};
///
/// let options = ParseOptions::new().parallel();
/// let file = parse_file_with_options("design.xd", options).unwrap();
/// ```
pub fn parse_file_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<XdFile> {
    XdParser::open_with_options(path, options)?.parse(&ResourceCache::new())
}

/// Parse a container file, sharing resources documents through `cache`.
///
/// Containers that reference the same resources paths decode them once per
/// cache.
///
/// # Example
///
/// ```no_run
/// use unxd::{parse_file_with_cache, ResourceCache};
///
/// let cache = ResourceCache::new();
/// let first = parse_file_with_cache("first.xd", &cache).unwrap();
/// let second = parse_file_with_cache("second.xd", &cache).unwrap();
/// println!("{} cached resources documents", cache.len());
/// ```
pub fn parse_file_with_cache<P: AsRef<Path>>(path: P, cache: &ResourceCache) -> Result<XdFile> {
    XdParser::open(path)?.parse(cache)
}

/// Parse a container from bytes.
///
/// # Example
///
/// ```no_run
/// use unxd::parse_bytes;
///
/// let data = std::fs::read("design.xd").unwrap();
/// let file = parse_bytes(&data).unwrap();
/// ```
pub fn parse_bytes(data: &[u8]) -> Result<XdFile> {
    XdParser::from_bytes(data)?.parse(&ResourceCache::new())
}

/// Parse a container from bytes with custom options.
pub fn parse_bytes_with_options(data: &[u8], options: ParseOptions) -> Result<XdFile> {
    XdParser::from_bytes_with_options(data, options)?.parse(&ResourceCache::new())
}

/// Parse a container from a reader.
pub fn parse_reader<R: Read>(reader: R) -> Result<XdFile> {
    XdParser::from_reader(reader)?.parse(&ResourceCache::new())
}

/// Convert a container file to JSON.
///
/// # Example
///
/// ```no_run
/// use unxd::{to_json, JsonFormat};
///
/// let json = to_json("design.xd", JsonFormat::Pretty).unwrap();
/// std::fs::write("design.json", json).unwrap();
/// ```
pub fn to_json<P: AsRef<Path>>(path: P, format: JsonFormat) -> Result<String> {
    let file = parse_file(path)?;
    render::to_json(&file, format)
}

/// Builder for parsing containers.
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use unxd::{ResourceCache, Unxd};
///
/// let cache = Arc::new(ResourceCache::new());
/// let file = Unxd::new()
///     .parallel()
///     .with_cache(Arc::clone(&cache))
///     .parse("design.xd")?;
/// # Ok::<(), unxd::Error>(())
/// ```
#[derive(Debug, Default)]
pub struct Unxd {
    parse_options: ParseOptions,
    cache: Option<Arc<ResourceCache>>,
}

impl Unxd {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load artboards in parallel.
    pub fn parallel(mut self) -> Self {
        self.parse_options = self.parse_options.parallel();
        self
    }

    /// Load artboards one after another.
    pub fn sequential(mut self) -> Self {
        self.parse_options = self.parse_options.sequential();
        self
    }

    /// Reject containers whose `mimetype` entry names another format.
    pub fn with_mime_check(mut self) -> Self {
        self.parse_options = self.parse_options.with_mime_check(true);
        self
    }

    /// Share resources documents through `cache`.
    ///
    /// Without a cache every parse starts from an empty one.
    pub fn with_cache(mut self, cache: Arc<ResourceCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Parse a container file.
    pub fn parse<P: AsRef<Path>>(self, path: P) -> Result<XdFile> {
        let parser = XdParser::open_with_options(path, self.parse_options)?;
        self.run(parser)
    }

    /// Parse a container from bytes.
    pub fn parse_bytes(self, data: &[u8]) -> Result<XdFile> {
        let parser = XdParser::from_bytes_with_options(data, self.parse_options)?;
        self.run(parser)
    }

    fn run(&self, parser: XdParser) -> Result<XdFile> {
        match &self.cache {
            Some(cache) => parser.parse(cache),
            None => parser.parse(&ResourceCache::new()),
        }
    }
}
