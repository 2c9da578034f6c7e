//! Resource document cache shared across artboards (and optionally parses).

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::error::Result;
use crate::model::ResourcesDocument;

/// Normalize a resources reference into a cache key and archive path.
///
/// Leading `/` separators are stripped; nothing else is changed, so keys
/// stay case-sensitive and keep any trailing separator.
pub fn normalize_resource_path(href: &str) -> &str {
    href.trim_start_matches('/')
}

/// Whether a lookup was served from the cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheStatus {
    /// The document was already cached
    Hit,
    /// The document was loaded and inserted
    Miss,
}

/// Mapping from resources path to its decoded document.
///
/// The cache is owned by the caller: pass a fresh one per parse, or share
/// one across containers known to use the same resources documents. Each
/// distinct path is decoded at most once per cache, including when
/// artboards load in parallel.
#[derive(Debug, Default)]
pub struct ResourceCache {
    entries: Mutex<HashMap<String, Arc<ResourcesDocument>>>,
}

impl ResourceCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached document for `path`, or run `load` and cache it.
    ///
    /// The check and the insert happen under one lock, so concurrent callers
    /// asking for the same path never load it twice. A failing `load` leaves
    /// the cache unchanged.
    pub fn get_or_load<F>(&self, path: &str, load: F) -> Result<(Arc<ResourcesDocument>, CacheStatus)>
    where
        F: FnOnce(&str) -> Result<ResourcesDocument>,
    {
        let key = normalize_resource_path(path);
        let mut entries = self.lock();

        if let Some(document) = entries.get(key) {
            log::trace!("Resource cache hit: {}", key);
            return Ok((Arc::clone(document), CacheStatus::Hit));
        }

        log::debug!("Resource cache miss: {}", key);
        let document = Arc::new(load(key)?);
        entries.insert(key.to_string(), Arc::clone(&document));
        Ok((document, CacheStatus::Miss))
    }

    /// Cached document for `path`, if any.
    pub fn get(&self, path: &str) -> Option<Arc<ResourcesDocument>> {
        self.lock().get(normalize_resource_path(path)).cloned()
    }

    /// Insert a document, replacing any previous entry for `path`.
    pub fn insert(&self, path: &str, document: ResourcesDocument) -> Arc<ResourcesDocument> {
        let document = Arc::new(document);
        self.lock()
            .insert(normalize_resource_path(path).to_string(), Arc::clone(&document));
        document
    }

    /// Check whether `path` is cached.
    pub fn contains(&self, path: &str) -> bool {
        self.lock().contains_key(normalize_resource_path(path))
    }

    /// Cached paths, sorted.
    pub fn paths(&self) -> Vec<String> {
        let mut paths: Vec<String> = self.lock().keys().cloned().collect();
        paths.sort();
        paths
    }

    /// Number of cached documents.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Check if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Drop all cached documents.
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Arc<ResourcesDocument>>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
