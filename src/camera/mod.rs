//! Camera rig: projection math, orbit controls, and the fly-in intro.
//!
//! The orbit controller owns the authoritative [`Camera`]; the one-shot
//! [`CameraIntro`] overrides the eye position until it lands. Which
//! controls are allowed (zoom/pan/rotate) and the pan sensitivity come
//! from the active layout mode.

pub mod controller;
pub mod core;
pub mod intro;

pub use controller::OrbitController;
pub use core::{Camera, CameraUniform};
pub use intro::CameraIntro;
