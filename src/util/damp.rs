//! Frame-rate-independent exponential damping.
//!
//! `damp` eases a value toward a target with an exponential decay curve:
//! fast while far away, asymptotically slow near the target. Because the
//! step is scaled by the frame delta through `exp`, convergence time does
//! not depend on the display refresh rate - two 8ms ticks advance exactly
//! as far as one 16ms tick.

use glam::Vec3;

/// Ease `current` toward `target` by the decay rate `lambda` over `dt`
/// seconds.
///
/// Higher `lambda` converges faster. The result never overshoots.
#[inline]
#[must_use]
pub fn damp(current: f32, target: f32, lambda: f32, dt: f32) -> f32 {
    current + (target - current) * (1.0 - (-lambda * dt).exp())
}

/// Component-wise [`damp`] over a 3D vector.
///
/// Each axis is damped independently, matching the per-axis animation of
/// image-plane positions.
#[inline]
#[must_use]
pub fn damp_vec3(current: Vec3, target: Vec3, lambda: f32, dt: f32) -> Vec3 {
    let k = 1.0 - (-lambda * dt).exp();
    current + (target - current) * k
}
