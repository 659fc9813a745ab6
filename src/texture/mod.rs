//! Texture residency: the session cache and the read-ahead batch loader.
//!
//! The cache maps thumbnail paths to opaque loaded-texture handles and
//! never evicts - handle memory is bounded by the dataset, and a warm
//! cache is the whole point of progressive reveal. The batch loader
//! pre-warms the cache for the next reveal increment on worker threads;
//! completions are applied on the main thread each frame, so consumers
//! only ever observe the cache from one thread.
//!
//! Image decode itself is delegated to the host through the
//! [`TextureSource`] trait.

pub mod batch;
pub mod cache;
pub mod source;

pub use batch::BatchLoader;
pub use cache::TextureCache;
pub use source::{TextureLoadError, TextureSource};
