//! One-shot camera fly-in.
//!
//! On mount (and again on a mode switch) the camera starts offset from
//! the mode's rest position, looking at the scene origin, and lerps in
//! with a fixed per-frame blend. This is deliberately a plain lerp, not
//! damping: the cheap, slightly frame-rate-dependent glide is part of
//! the look. Once within the arrival distance the eye snaps to the rest
//! position and the intro is done for good until re-armed.

use glam::Vec3;

use crate::settings::IntroOptions;

/// State of the camera fly-in animation.
#[derive(Debug, Clone)]
pub struct CameraIntro {
    rest: Vec3,
    eye: Vec3,
    blend: f32,
    arrive_distance: f32,
    done: bool,
}

impl CameraIntro {
    /// Arm a fly-in toward `rest`, starting `offset` further out on +Z.
    #[must_use]
    pub fn new(rest: Vec3, options: &IntroOptions) -> Self {
        Self {
            rest,
            eye: rest + Vec3::new(0.0, 0.0, options.offset),
            blend: options.blend,
            arrive_distance: options.arrive_distance,
            done: false,
        }
    }

    /// Re-arm toward a new rest position (mode switch).
    pub fn restart(&mut self, rest: Vec3, options: &IntroOptions) {
        *self = Self::new(rest, options);
    }

    /// Advance one frame. Returns the eye position to use this frame.
    ///
    /// After arrival this is a no-op that keeps returning the rest
    /// position; the transition to done is one-way.
    pub fn advance(&mut self) -> Vec3 {
        if self.done {
            return self.eye;
        }
        self.eye = self.eye.lerp(self.rest, self.blend);
        if self.eye.distance(self.rest) < self.arrive_distance {
            // Snap so the asymptote never leaves a sub-pixel offset
            self.eye = self.rest;
            self.done = true;
            log::debug!("camera intro complete at {:?}", self.rest);
        }
        self.eye
    }

    /// Whether the fly-in has landed.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Current eye position without advancing.
    #[must_use]
    pub fn eye(&self) -> Vec3 {
        self.eye
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_offset_behind_rest() {
        let intro = CameraIntro::new(Vec3::new(0.0, 0.0, 50.0), &IntroOptions::default());
        assert_eq!(intro.eye(), Vec3::new(0.0, 0.0, 100.0));
        assert!(!intro.is_done());
    }

    #[test]
    fn converges_snaps_and_stays_done() {
        let rest = Vec3::new(3.0, -2.0, 50.0);
        let mut intro = CameraIntro::new(rest, &IntroOptions::default());

        let mut frames = 0;
        while !intro.is_done() {
            let _ = intro.advance();
            frames += 1;
            assert!(frames < 1000, "intro never landed");
        }
        // Snapped exactly, not merely close
        assert_eq!(intro.eye(), rest);

        // One-way: further frames stay pinned
        assert_eq!(intro.advance(), rest);
        assert!(intro.is_done());
    }

    #[test]
    fn approach_is_monotonic() {
        let rest = Vec3::new(0.0, 0.0, 50.0);
        let mut intro = CameraIntro::new(rest, &IntroOptions::default());
        let mut prev = intro.eye().distance(rest);
        for _ in 0..50 {
            let eye = intro.advance();
            let dist = eye.distance(rest);
            assert!(dist <= prev);
            prev = dist;
        }
    }

    #[test]
    fn restart_rearms_toward_new_rest() {
        let mut intro = CameraIntro::new(Vec3::new(0.0, 0.0, 50.0), &IntroOptions::default());
        while !intro.is_done() {
            let _ = intro.advance();
        }
        intro.restart(Vec3::new(0.0, 0.0, 0.1), &IntroOptions::default());
        assert!(!intro.is_done());
        assert_eq!(intro.eye(), Vec3::new(0.0, 0.0, 50.1));
    }
}
