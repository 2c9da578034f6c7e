//! Container parsing module.

mod cache;
mod decode;
mod options;
mod resolver;
mod xd_parser;

pub use cache::{normalize_resource_path, CacheStatus, ResourceCache};
pub use options::ParseOptions;
pub use resolver::{resolve_pattern_bytes, resource_entry_path, RESOURCE_DIR};
pub use xd_parser::{XdParser, MANIFEST_PATH};
