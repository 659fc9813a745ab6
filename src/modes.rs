//! UI-side state for the layout mode and visible-count controls.
//!
//! The controller mirrors what the toolbar shows: the active mode and
//! the requested visible count, with the stepper clamped to the legal
//! range. It never touches the scene itself; the host applies its state
//! through [`SceneComposer`](crate::scene::SceneComposer) (`set_mode` /
//! `set_image_count`), which performs its own clamping as the final
//! authority.

use crate::layout::LayoutMode;
use crate::settings::RevealOptions;

/// Toolbar state: active layout mode plus the visible-count stepper.
#[derive(Debug, Clone)]
pub struct ModeController {
    mode: LayoutMode,
    image_count: usize,
    reveal: RevealOptions,
    dataset_len: usize,
}

impl ModeController {
    /// Create a controller for a dataset of `dataset_len` records,
    /// starting at the default mode and the clamped initial count.
    #[must_use]
    pub fn new(reveal: RevealOptions, dataset_len: usize) -> Self {
        let mut controller = Self {
            mode: LayoutMode::default(),
            image_count: 0,
            reveal,
            dataset_len,
        };
        controller.image_count = controller.clamp(controller.reveal.initial);
        controller
    }

    /// Upper bound on the visible count: the configured cap, further
    /// capped by the dataset length.
    fn upper(&self) -> usize {
        self.reveal.max.min(self.dataset_len)
    }

    fn clamp(&self, requested: usize) -> usize {
        requested.max(self.reveal.initial.min(self.upper())).min(self.upper())
    }

    /// Step the count up by the configured increment.
    pub fn increment(&mut self) {
        self.image_count = self.clamp(self.image_count.saturating_add(self.reveal.step));
    }

    /// Step the count down by the configured increment, never below the
    /// initial count.
    pub fn decrement(&mut self) {
        self.image_count = self.clamp(self.image_count.saturating_sub(self.reveal.step));
    }

    /// Set the count directly (slider input), clamped to the legal range.
    pub fn set_count(&mut self, requested: usize) {
        self.image_count = self.clamp(requested);
    }

    /// Switch the active mode.
    pub fn set_mode(&mut self, mode: LayoutMode) {
        self.mode = mode;
    }

    /// Whether the increment control should be enabled. The host
    /// additionally disables it while a reveal batch is loading.
    #[must_use]
    pub fn can_increment(&self) -> bool {
        self.image_count < self.upper()
    }

    /// Whether the decrement control should be enabled.
    #[must_use]
    pub fn can_decrement(&self) -> bool {
        self.image_count > self.reveal.initial.min(self.upper())
    }

    /// The active layout mode.
    #[must_use]
    pub fn mode(&self) -> LayoutMode {
        self.mode
    }

    /// The requested visible count.
    #[must_use]
    pub fn image_count(&self) -> usize {
        self.image_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reveal() -> RevealOptions {
        RevealOptions::default() // initial 20, step 5, max 200
    }

    #[test]
    fn starts_at_initial_count_and_default_mode() {
        let ctl = ModeController::new(reveal(), 500);
        assert_eq!(ctl.image_count(), 20);
        assert_eq!(ctl.mode(), LayoutMode::Grid);
    }

    #[test]
    fn increment_steps_until_dataset_end() {
        // 25 records: one step reveals the rest, then the control locks.
        let mut ctl = ModeController::new(reveal(), 25);
        assert!(ctl.can_increment());

        ctl.increment();
        assert_eq!(ctl.image_count(), 25);
        assert!(!ctl.can_increment());

        ctl.increment();
        assert_eq!(ctl.image_count(), 25);
    }

    #[test]
    fn decrement_never_goes_below_initial() {
        let mut ctl = ModeController::new(reveal(), 500);
        ctl.increment();
        assert_eq!(ctl.image_count(), 25);
        assert!(ctl.can_decrement());

        ctl.decrement();
        ctl.decrement();
        assert_eq!(ctl.image_count(), 20);
        assert!(!ctl.can_decrement());
    }

    #[test]
    fn configured_cap_binds_before_dataset() {
        let mut ctl = ModeController::new(reveal(), 500);
        ctl.set_count(10_000);
        assert_eq!(ctl.image_count(), 200);
        assert!(!ctl.can_increment());
    }

    #[test]
    fn short_dataset_pins_the_count() {
        let mut ctl = ModeController::new(reveal(), 7);
        assert_eq!(ctl.image_count(), 7);
        assert!(!ctl.can_increment());
        assert!(!ctl.can_decrement());

        ctl.increment();
        ctl.decrement();
        assert_eq!(ctl.image_count(), 7);
    }

    #[test]
    fn empty_dataset_yields_zero() {
        let ctl = ModeController::new(reveal(), 0);
        assert_eq!(ctl.image_count(), 0);
        assert!(!ctl.can_increment());
        assert!(!ctl.can_decrement());
    }

    #[test]
    fn set_count_clamps_both_ends() {
        let mut ctl = ModeController::new(reveal(), 100);
        ctl.set_count(3);
        assert_eq!(ctl.image_count(), 20);
        ctl.set_count(60);
        assert_eq!(ctl.image_count(), 60);
        ctl.set_count(400);
        assert_eq!(ctl.image_count(), 100);
    }

    #[test]
    fn mode_switch_leaves_count_alone() {
        let mut ctl = ModeController::new(reveal(), 100);
        ctl.increment();
        ctl.set_mode(LayoutMode::Sphere);
        assert_eq!(ctl.mode(), LayoutMode::Sphere);
        assert_eq!(ctl.image_count(), 25);
    }
}
