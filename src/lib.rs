//! GPU-accelerated 3D photo gallery engine built on wgpu.
//!
//! Galleria renders a large photo collection as billboarded planes in a
//! 3D scene: images reveal progressively in batches, fly in from the
//! origin with damped position/opacity animation, and a layout "mode"
//! drives camera framing and orbit-control permissions.
//!
//! # Key entry points
//!
//! - [`scene::SceneComposer`] - owns the live image objects, camera rig,
//!   and selection state
//! - [`modes::ModeController`] - UI-facing (mode, visible count) state
//! - [`texture::BatchLoader`] - read-ahead texture prefetch into the
//!   session [`texture::TextureCache`]
//! - [`settings::Settings`] - runtime tunables (reveal window, damping
//!   rates, camera intro)
//!
//! # Architecture
//!
//! The main thread drives a per-frame tick
//! ([`scene::SceneComposer::advance`]). Texture loads run on detached
//! worker threads and deliver results over a channel; completions are
//! applied to the cache on the main thread during the tick, so no
//! component ever observes a half-loaded batch. GPU upload and the
//! billboard draw pass live in [`gpu`] and render into an off-screen
//! target owned by the host.

pub mod camera;
pub mod dataset;
pub mod error;
pub mod gpu;
pub mod input;
pub mod layout;
pub mod modes;
pub mod scene;
pub mod settings;
pub mod texture;
pub mod util;

pub use error::GalleriaError;
