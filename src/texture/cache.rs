//! Session-lifetime texture cache keyed by asset path.

use rustc_hash::FxHashMap;

/// Path → handle store shared by every image object for the whole
/// session.
///
/// No eviction: once a handle is present it stays until shutdown.
/// Inserts are idempotent per path - the first writer wins and later
/// writers for the same path are no-ops, so racing batch completions
/// are harmless. A failed load never creates an entry, which keeps the
/// path retryable.
#[derive(Debug)]
pub struct TextureCache<H> {
    entries: FxHashMap<String, H>,
}

impl<H: Clone> TextureCache<H> {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: FxHashMap::default(),
        }
    }

    /// The handle for `path`, if loaded.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<H> {
        self.entries.get(path).cloned()
    }

    /// Whether `path` has a loaded handle.
    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    /// Store a handle for `path`. No-op if an entry already exists.
    pub fn insert(&mut self, path: &str, handle: H) {
        if !self.entries.contains_key(path) {
            let _ = self.entries.insert(path.to_owned(), handle);
            log::trace!("texture cached: {path}");
        }
    }

    /// Number of cached handles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<H: Clone> Default for TextureCache<H> {
    fn default() -> Self {
        Self::new()
    }
}
