//! GPU plumbing: device/queue ownership, texture upload, and the
//! billboard draw pass.
//!
//! The context is headless by design - the host owns the window (or no
//! window at all) and hands us a device/queue pair or lets us request
//! one; we only ever render into a caller-supplied texture view.

pub mod buffer;
pub mod render_context;
pub mod renderer;
pub mod texture;

pub use buffer::TypedBuffer;
pub use render_context::{RenderContext, RenderContextError};
pub use renderer::GalleryRenderer;
pub use texture::{ImageTexture, RenderTarget};
