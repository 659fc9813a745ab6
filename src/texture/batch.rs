//! Read-ahead batch loading into the texture cache.
//!
//! A batch is the next reveal increment: the contiguous dataset slice
//! just beyond the visible prefix. Each `preload` call spawns one
//! detached worker thread that loads every not-yet-cached path in the
//! slice and reports every outcome - success or failure - over a
//! channel. The batch settles only once all of its slots have reported
//! (join-all, never first-failure-abort). Completions are applied to
//! the cache on the main thread in [`BatchLoader::pump`].
//!
//! There is no cancellation: a batch made irrelevant by a shrinking
//! visible count still completes into the cache, which is safe because
//! inserts are idempotent per path. Overlapping batches race freely for
//! the same reason.

use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;

use rustc_hash::{FxHashMap, FxHashSet};

use super::cache::TextureCache;
use super::source::{TextureLoadError, TextureSource};
use crate::dataset::ImageRecord;
use crate::error::GalleriaError;

/// One settled load slot, reported from a worker thread.
struct LoadOutcome<H> {
    /// Owning batch, or `None` for a direct single-path load.
    batch: Option<u64>,
    path: String,
    result: Result<H, TextureLoadError>,
}

/// Spawns texture loads and applies their completions to the cache.
pub struct BatchLoader<S: TextureSource> {
    source: Arc<S>,
    tx: Sender<LoadOutcome<S::Handle>>,
    rx: Receiver<LoadOutcome<S::Handle>>,
    /// Unsettled slot count per outstanding batch.
    pending: FxHashMap<u64, usize>,
    /// Paths with a load in flight (batch or direct). Guarantees at most
    /// one issued load per distinct path at any time.
    inflight: FxHashSet<String>,
    next_batch_id: u64,
}

impl<S: TextureSource> BatchLoader<S> {
    /// Create a loader backed by the given texture source.
    #[must_use]
    pub fn new(source: Arc<S>) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            source,
            tx,
            rx,
            pending: FxHashMap::default(),
            inflight: FxHashSet::default(),
            next_batch_id: 0,
        }
    }

    /// Pre-warm the cache for `records` on a worker thread.
    ///
    /// Only paths absent from the cache and not already in flight are
    /// loaded. If nothing needs loading, no batch is created and
    /// [`is_loading`](Self::is_loading) is unaffected.
    ///
    /// # Errors
    ///
    /// Returns [`GalleriaError::ThreadSpawn`] if the worker thread
    /// cannot be spawned; no batch is registered in that case.
    pub fn preload(
        &mut self,
        records: &[ImageRecord],
        cache: &TextureCache<S::Handle>,
    ) -> Result<(), GalleriaError> {
        let paths: Vec<String> = records
            .iter()
            .filter(|r| {
                !cache.contains(&r.thumb_path)
                    && !self.inflight.contains(&r.thumb_path)
            })
            .map(|r| r.thumb_path.clone())
            .collect();

        if paths.is_empty() {
            log::debug!("preload: nothing to do ({} records warm)", records.len());
            return Ok(());
        }

        let id = self.next_batch_id;
        self.next_batch_id += 1;

        let source = Arc::clone(&self.source);
        let tx = self.tx.clone();
        let worker_paths = paths.clone();
        let handle = std::thread::Builder::new()
            .name(format!("texture-batch-{id}"))
            .spawn(move || {
                for path in worker_paths {
                    let result = source.load(&path);
                    // Receiver gone means the engine shut down mid-batch.
                    let _ = tx.send(LoadOutcome {
                        batch: Some(id),
                        path,
                        result,
                    });
                }
            })
            .map_err(GalleriaError::ThreadSpawn)?;
        drop(handle); // detached

        log::debug!("texture batch {id}: {} loads issued", paths.len());
        let _ = self.pending.insert(id, paths.len());
        self.inflight.extend(paths);
        Ok(())
    }

    /// Resolve the texture for a single path: the cached handle if
    /// present, otherwise issue a detached direct load and return `None`
    /// for now. Callers never branch on hit/miss themselves.
    ///
    /// Direct loads do not count as an outstanding batch, so they never
    /// disable the UI's increment controls.
    pub fn request(
        &mut self,
        path: &str,
        cache: &TextureCache<S::Handle>,
    ) -> Option<S::Handle> {
        if let Some(handle) = cache.get(path) {
            return Some(handle);
        }
        if self.inflight.contains(path) {
            return None;
        }

        let source = Arc::clone(&self.source);
        let tx = self.tx.clone();
        let worker_path = path.to_owned();
        let spawned = std::thread::Builder::new()
            .name("texture-load".to_owned())
            .spawn(move || {
                let result = source.load(&worker_path);
                let _ = tx.send(LoadOutcome {
                    batch: None,
                    path: worker_path,
                    result,
                });
            });
        match spawned {
            Ok(handle) => {
                drop(handle); // detached
                let _ = self.inflight.insert(path.to_owned());
            }
            Err(e) => {
                // Degraded: the plane stays untextured this session
                // unless a later request succeeds in spawning.
                log::error!("failed to spawn texture load for '{path}': {e}");
            }
        }
        None
    }

    /// Apply settled loads to the cache and retire completed batches.
    /// Call once per frame on the main thread.
    pub fn pump(&mut self, cache: &mut TextureCache<S::Handle>) {
        while let Ok(outcome) = self.rx.try_recv() {
            let _ = self.inflight.remove(&outcome.path);
            match outcome.result {
                Ok(handle) => cache.insert(&outcome.path, handle),
                // The slot still resolves; the path stays retryable.
                Err(e) => log::warn!("{e}"),
            }
            if let Some(id) = outcome.batch {
                if let Some(remaining) = self.pending.get_mut(&id) {
                    *remaining -= 1;
                    if *remaining == 0 {
                        let _ = self.pending.remove(&id);
                        log::debug!("texture batch {id} settled");
                    }
                }
            }
        }
    }

    /// Whether any preload batch is still outstanding. Drives the UI's
    /// "disable increment while loading" affordance.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        !self.pending.is_empty()
    }
}
