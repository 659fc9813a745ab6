//! Small shared utilities: damped interpolation and frame timing.

pub mod damp;
pub mod frame_timing;

pub use damp::{damp, damp_vec3};
pub use frame_timing::FrameTiming;
