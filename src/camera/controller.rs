//! Orbital camera controller gated by per-mode control permissions.

use glam::{Quat, Vec2, Vec3};

use super::core::Camera;
use crate::layout::LayoutConfig;
use crate::settings::CameraOptions;

/// Orbital camera around a focus point.
///
/// The eye sits at `focus + orientation * Z * distance`. Rotation, pan,
/// and zoom each honor the enablement flag of the active layout mode;
/// [`apply_layout`](Self::apply_layout) swaps camera framing and
/// permissions atomically on a mode switch.
#[derive(Debug)]
pub struct OrbitController {
    orientation: Quat,
    distance: f32,
    focus_point: Vec3,

    /// The authoritative camera this controller positions.
    pub camera: Camera,

    rotate_enabled: bool,
    pan_enabled: bool,
    zoom_enabled: bool,
    rotate_speed: f32,
    pan_speed: f32,
    zoom_speed: f32,
}

impl OrbitController {
    /// Create a controller at the layout's rest framing.
    #[must_use]
    pub fn new(layout: &LayoutConfig, options: &CameraOptions, aspect: f32) -> Self {
        let camera = Camera {
            eye: layout.camera_position(),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy: layout.camera_fov,
            znear: options.znear,
            zfar: options.zfar,
        };

        let mut controller = Self {
            orientation: Quat::IDENTITY,
            distance: 1.0,
            focus_point: Vec3::ZERO,
            camera,
            rotate_enabled: true,
            pan_enabled: true,
            zoom_enabled: true,
            rotate_speed: options.rotate_speed * 0.01,
            pan_speed: layout.pan_speed * 0.1,
            zoom_speed: options.zoom_speed,
        };
        controller.apply_layout(layout);
        controller
    }

    /// Swap in a mode's framing and control permissions. The focus
    /// returns to the scene origin; image positions are untouched.
    pub fn apply_layout(&mut self, layout: &LayoutConfig) {
        let rest = layout.camera_position();
        self.focus_point = Vec3::ZERO;
        self.distance = rest.length().max(1e-3);
        self.orientation = Quat::from_rotation_arc(Vec3::Z, rest.normalize_or(Vec3::Z));
        self.camera.fovy = layout.camera_fov;
        self.rotate_enabled = layout.enable_rotate;
        self.pan_enabled = layout.enable_pan;
        self.zoom_enabled = layout.enable_zoom;
        self.pan_speed = layout.pan_speed * 0.1;
        self.update_camera_pos();
    }

    fn update_camera_pos(&mut self) {
        let dir = self.orientation * Vec3::Z;
        self.camera.eye = self.focus_point + dir * self.distance;
        self.camera.target = self.focus_point;
        self.camera.up = self.orientation * Vec3::Y;
    }

    /// Update the projection aspect after a viewport resize.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera.aspect = width as f32 / height.max(1) as f32;
    }

    /// Orbit by a screen-space drag delta. No-op when the mode disables
    /// rotation.
    pub fn rotate(&mut self, delta: Vec2) {
        if !self.rotate_enabled {
            return;
        }
        // Horizontal around the camera's up, then vertical around the
        // resulting right vector
        let up = self.orientation * Vec3::Y;
        self.orientation =
            Quat::from_axis_angle(up, -delta.x * self.rotate_speed) * self.orientation;
        let right = self.orientation * Vec3::X;
        self.orientation =
            Quat::from_axis_angle(right, -delta.y * self.rotate_speed) * self.orientation;
        self.update_camera_pos();
    }

    /// Pan the focus point by a screen-space drag delta. No-op when the
    /// mode disables panning.
    pub fn pan(&mut self, delta: Vec2) {
        if !self.pan_enabled {
            return;
        }
        let right = self.orientation * Vec3::X;
        let up = self.orientation * Vec3::Y;
        self.focus_point +=
            right * (-delta.x * self.pan_speed) + up * (delta.y * self.pan_speed);
        self.update_camera_pos();
    }

    /// Zoom by a scroll delta (positive = closer). No-op when the mode
    /// disables zooming.
    pub fn zoom(&mut self, delta: f32) {
        if !self.zoom_enabled {
            return;
        }
        self.distance *= 1.0 - delta * self.zoom_speed;
        self.distance = self.distance.clamp(0.05, 1000.0);
        self.update_camera_pos();
    }

    /// Frame all given positions: center the focus on their centroid and
    /// back off far enough that the bounding sphere fits the view.
    pub fn fit_to_positions(&mut self, positions: &[Vec3]) {
        if positions.is_empty() {
            return;
        }

        let centroid: Vec3 =
            positions.iter().copied().sum::<Vec3>() / positions.len() as f32;
        let radius = positions
            .iter()
            .map(|p| (*p - centroid).length())
            .fold(0.0f32, f32::max);

        self.focus_point = centroid;
        let fovy_rad = self.camera.fovy.to_radians();
        let fit_distance = radius.max(1.0) / (fovy_rad / 2.0).tan();
        self.distance = fit_distance * 1.5; // comfortable padding
        self.update_camera_pos();
    }

    /// Current eye position.
    #[must_use]
    pub fn eye(&self) -> Vec3 {
        self.camera.eye
    }
}
