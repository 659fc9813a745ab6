//! Per-frame timing: frame delta for the animation tick plus smoothed FPS.

use web_time::{Duration, Instant};

/// Longest frame delta fed to animation. Stalls (window drag, debugger,
/// texture decode hiccup) otherwise teleport every damped value to its
/// target in one tick.
const MAX_FRAME_DELTA: Duration = Duration::from_millis(100);

/// Tracks frame-to-frame deltas and a smoothed FPS estimate.
pub struct FrameTiming {
    last_frame: Instant,
    /// Smoothed FPS using an exponential moving average.
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0).
    smoothing: f32,
}

impl FrameTiming {
    /// Create a new frame timer starting now.
    #[must_use]
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
            smoothed_fps: 60.0, // reasonable starting estimate
            smoothing: 0.05,
        }
    }

    /// Call once at the start of each frame. Returns the delta since the
    /// previous tick in seconds, clamped to [`MAX_FRAME_DELTA`].
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;

        let frame_time = elapsed.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }

        elapsed.min(MAX_FRAME_DELTA).as_secs_f32()
    }

    /// Current FPS (smoothed).
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}

impl Default for FrameTiming {
    fn default() -> Self {
        Self::new()
    }
}
