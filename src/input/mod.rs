//! Input routing: host events → orbit motion and pointer-downs.

mod event;

pub use event::{InputEvent, MouseButton};

use glam::Vec2;

use crate::camera::OrbitController;

/// Tracks cursor/modifier state and drives the orbit controller.
///
/// Drag rotates (or pans with shift held), scroll zooms - each subject
/// to the active mode's permission flags inside the controller. Button
/// presses are surfaced to the caller, who routes them to the scene for
/// selection; the router itself never touches selection state.
#[derive(Debug, Default)]
pub struct InputRouter {
    cursor: Vec2,
    primary_pressed: bool,
    shift_held: bool,
}

impl InputRouter {
    /// Create a router with no buttons pressed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Process one host event. Returns the button on pointer-down so the
    /// caller can offer it to the scene
    /// ([`crate::scene::SceneComposer::pointer_down`]).
    pub fn handle_event(
        &mut self,
        event: InputEvent,
        orbit: &mut OrbitController,
    ) -> Option<MouseButton> {
        match event {
            InputEvent::CursorMoved { x, y } => {
                let pos = Vec2::new(x, y);
                if self.primary_pressed {
                    let delta = pos - self.cursor;
                    if self.shift_held {
                        orbit.pan(delta);
                    } else {
                        orbit.rotate(delta);
                    }
                }
                self.cursor = pos;
                None
            }
            InputEvent::MouseButton { button, pressed } => {
                if button == MouseButton::Left {
                    self.primary_pressed = pressed;
                }
                pressed.then_some(button)
            }
            InputEvent::Scroll { delta } => {
                orbit.zoom(delta);
                None
            }
            InputEvent::ModifiersChanged { shift } => {
                self.shift_held = shift;
                None
            }
        }
    }

    /// Current cursor position in physical pixels.
    #[must_use]
    pub fn cursor(&self) -> Vec2 {
        self.cursor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::tests::grid_config;
    use crate::settings::CameraOptions;
    use glam::Vec3;

    fn orbit() -> OrbitController {
        OrbitController::new(&grid_config(), &CameraOptions::default(), 1.6)
    }

    fn press(button: MouseButton) -> InputEvent {
        InputEvent::MouseButton {
            button,
            pressed: true,
        }
    }

    #[test]
    fn pointer_downs_are_surfaced() {
        let mut router = InputRouter::new();
        let mut orbit = orbit();
        assert_eq!(
            router.handle_event(press(MouseButton::Left), &mut orbit),
            Some(MouseButton::Left)
        );
        assert_eq!(
            router.handle_event(press(MouseButton::Right), &mut orbit),
            Some(MouseButton::Right)
        );
        assert_eq!(
            router.handle_event(
                InputEvent::MouseButton {
                    button: MouseButton::Left,
                    pressed: false,
                },
                &mut orbit
            ),
            None
        );
    }

    #[test]
    fn drag_rotates_and_shift_drag_pans() {
        let mut router = InputRouter::new();
        let mut orbit = orbit();
        let rest = orbit.eye();

        let _ = router.handle_event(
            InputEvent::CursorMoved { x: 100.0, y: 100.0 },
            &mut orbit,
        );
        let _ = router.handle_event(press(MouseButton::Left), &mut orbit);
        let _ = router.handle_event(
            InputEvent::CursorMoved { x: 180.0, y: 120.0 },
            &mut orbit,
        );
        assert!((orbit.eye() - rest).length() > 1e-4, "drag should orbit");
        // Orbit preserves distance to the focus point
        assert!((orbit.eye().length() - rest.length()).abs() < 1e-3);

        let _ = router.handle_event(
            InputEvent::ModifiersChanged { shift: true },
            &mut orbit,
        );
        let _ = router.handle_event(
            InputEvent::CursorMoved { x: 200.0, y: 140.0 },
            &mut orbit,
        );
        // Pan moves the focus point off the origin
        assert!((orbit.camera.target - Vec3::ZERO).length() > 1e-4);
    }

    #[test]
    fn scroll_zooms() {
        let mut router = InputRouter::new();
        let mut orbit = orbit();
        let before = orbit.eye().length();
        let _ = router.handle_event(InputEvent::Scroll { delta: 1.0 }, &mut orbit);
        assert!(orbit.eye().length() < before);
    }

    #[test]
    fn release_stops_dragging() {
        let mut router = InputRouter::new();
        let mut orbit = orbit();
        let _ = router.handle_event(press(MouseButton::Left), &mut orbit);
        let _ = router.handle_event(
            InputEvent::MouseButton {
                button: MouseButton::Left,
                pressed: false,
            },
            &mut orbit,
        );
        let eye = orbit.eye();
        let _ = router.handle_event(
            InputEvent::CursorMoved { x: 300.0, y: 300.0 },
            &mut orbit,
        );
        assert_eq!(orbit.eye(), eye);
    }
}
