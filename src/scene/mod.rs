//! The live scene: image objects, selection, picking, and composition.
//!
//! [`SceneComposer`] owns everything mutable in the scene - the visible
//! image objects, the camera rig, the texture cache/loader pair, and the
//! selection - and is its sole mutator. Each frame it emits a
//! [`GalleryFrame`]: the flat sprite list the GPU billboard pass (or a
//! test) consumes.

pub mod composer;
pub mod image_object;
pub mod picking;
pub mod viewer;

pub use composer::SceneComposer;
pub use image_object::{ImageObject, Phase};
pub use viewer::{OverlayClick, ViewerOverlay};

use glam::{Quat, Vec3};

/// One renderable billboard, resolved for the current frame.
#[derive(Debug, Clone)]
pub struct Sprite<H> {
    /// Record id of the image.
    pub id: u32,
    /// Current animated world position.
    pub position: Vec3,
    /// Current billboard orientation (faces the camera).
    pub orientation: Quat,
    /// Current fade-in opacity in `[0, 1]`.
    pub opacity: f32,
    /// Plane size `[width, height]` from the active layout mode.
    pub size: [f32; 2],
    /// Loaded texture handle, or `None` while the load is in flight or
    /// failed (the plane renders untextured - degraded, not fatal).
    pub texture: Option<H>,
}

/// Everything the draw pass needs for one frame, in visible-set order.
#[derive(Debug, Clone)]
pub struct GalleryFrame<H> {
    /// Billboards for every visible image.
    pub sprites: Vec<Sprite<H>>,
}
