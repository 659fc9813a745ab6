//! The asset-loader collaborator boundary.

use std::fmt;

/// Failure to produce a texture for a path.
///
/// Non-fatal by design: the batch slot still resolves, the path stays
/// absent from the cache and therefore retryable, and the image plane
/// renders untextured until a retry succeeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureLoadError {
    /// The asset path that failed.
    pub path: String,
    /// Human-readable failure reason from the host loader.
    pub reason: String,
}

impl fmt::Display for TextureLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "texture load failed for '{}': {}", self.path, self.reason)
    }
}

impl std::error::Error for TextureLoadError {}

/// Host-supplied texture loader.
///
/// Given an asset path, produce a loaded-texture handle or a failure.
/// Called from loader worker threads; implementations typically decode
/// an image file and upload it (see [`crate::gpu::ImageTexture`] for the
/// wgpu handle type). No retry/backoff is expected here - the engine
/// retries failed paths itself when an image becomes visible.
pub trait TextureSource: Send + Sync + 'static {
    /// Opaque loaded-texture handle stored in the cache. Cheap to clone
    /// (typically an `Arc`).
    type Handle: Clone + Send + 'static;

    /// Load the asset at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`TextureLoadError`] when the asset cannot be produced.
    fn load(&self, path: &str) -> Result<Self::Handle, TextureLoadError>;
}
