//! CPU ray picking against billboard bounding spheres.
//!
//! Planes always face the camera, so a sphere with radius half the plane
//! diagonal is a tight, orientation-free proxy. The nearest hit along
//! the cursor ray wins.

use glam::{Vec2, Vec3};

use super::image_object::ImageObject;
use crate::camera::Camera;

/// A world-space ray.
#[derive(Debug, Clone, Copy)]
struct Ray {
    origin: Vec3,
    dir: Vec3,
}

/// Build the world-space ray under a cursor position.
///
/// `cursor` and `viewport` are in physical pixels.
fn cursor_ray(camera: &Camera, cursor: Vec2, viewport: Vec2) -> Ray {
    let ndc = Vec2::new(
        2.0 * cursor.x / viewport.x - 1.0,
        1.0 - 2.0 * cursor.y / viewport.y,
    );
    let inv = camera.build_matrix().inverse();
    // wgpu depth convention: near plane at NDC z = 0, far at z = 1
    let near = inv * glam::Vec4::new(ndc.x, ndc.y, 0.0, 1.0);
    let far = inv * glam::Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
    let near = near.truncate() / near.w;
    let far = far.truncate() / far.w;
    Ray {
        origin: camera.eye,
        dir: (far - near).normalize_or_zero(),
    }
}

/// Distance along `ray` to the sphere at `center`, if hit in front of
/// the origin.
fn ray_sphere(ray: Ray, center: Vec3, radius: f32) -> Option<f32> {
    let oc = center - ray.origin;
    let tca = oc.dot(ray.dir);
    if tca < 0.0 {
        return None; // behind the camera
    }
    let d2 = oc.length_squared() - tca * tca;
    let r2 = radius * radius;
    if d2 > r2 {
        return None;
    }
    Some(tca - (r2 - d2).sqrt())
}

/// The image under the cursor, if any: nearest bounding-sphere hit
/// along the cursor ray. `plane_size` is the active mode's plane size.
#[must_use]
pub fn pick(
    camera: &Camera,
    cursor: Vec2,
    viewport: Vec2,
    objects: &[ImageObject],
    plane_size: [f32; 2],
) -> Option<u32> {
    if viewport.x <= 0.0 || viewport.y <= 0.0 {
        return None;
    }
    let ray = cursor_ray(camera, cursor, viewport);
    if ray.dir == Vec3::ZERO {
        return None;
    }
    let radius = 0.5 * (plane_size[0].hypot(plane_size[1]));

    let mut best: Option<(f32, u32)> = None;
    for obj in objects {
        if let Some(t) = ray_sphere(ray, obj.position(), radius) {
            if best.is_none_or(|(bt, _)| t < bt) {
                best = Some((t, obj.id()));
            }
        }
    }
    best.map(|(_, id)| id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::ImageRecord;
    use crate::settings::AnimationOptions;

    const VIEWPORT: Vec2 = Vec2::new(800.0, 600.0);

    fn camera() -> Camera {
        Camera {
            eye: Vec3::new(0.0, 0.0, 50.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: VIEWPORT.x / VIEWPORT.y,
            fovy: 50.0,
            znear: 0.1,
            zfar: 1000.0,
        }
    }

    /// An object already settled at `position`.
    fn settled_object(id: u32, position: [f32; 3]) -> ImageObject {
        let mut obj = ImageObject::new(ImageRecord {
            id,
            thumb_path: format!("thumb/{id}.webp"),
            highres_path: None,
            position,
        });
        let anim = AnimationOptions::default();
        for _ in 0..5000 {
            obj.update(1.0 / 60.0, Vec3::new(0.0, 0.0, 50.0), &anim);
        }
        obj
    }

    #[test]
    fn center_cursor_picks_object_at_origin() {
        let objects = vec![settled_object(3, [0.0, 0.0, 0.0])];
        let hit = pick(
            &camera(),
            VIEWPORT / 2.0,
            VIEWPORT,
            &objects,
            [1.0, 1.0],
        );
        assert_eq!(hit, Some(3));
    }

    #[test]
    fn corner_cursor_misses() {
        let objects = vec![settled_object(3, [0.0, 0.0, 0.0])];
        let hit = pick(&camera(), Vec2::ZERO, VIEWPORT, &objects, [1.0, 1.0]);
        assert_eq!(hit, None);
    }

    #[test]
    fn nearest_object_along_ray_wins() {
        let objects = vec![
            settled_object(1, [0.0, 0.0, -20.0]),
            settled_object(2, [0.0, 0.0, 10.0]),
        ];
        let hit = pick(
            &camera(),
            VIEWPORT / 2.0,
            VIEWPORT,
            &objects,
            [1.0, 1.0],
        );
        // Object 2 sits between the camera and object 1
        assert_eq!(hit, Some(2));
    }

    #[test]
    fn objects_behind_camera_are_ignored() {
        let objects = vec![settled_object(1, [0.0, 0.0, 80.0])];
        let hit = pick(
            &camera(),
            VIEWPORT / 2.0,
            VIEWPORT,
            &objects,
            [1.0, 1.0],
        );
        assert_eq!(hit, None);
    }

    #[test]
    fn degenerate_viewport_picks_nothing() {
        let objects = vec![settled_object(1, [0.0, 0.0, 0.0])];
        assert_eq!(
            pick(&camera(), Vec2::ZERO, Vec2::ZERO, &objects, [1.0, 1.0]),
            None
        );
    }
}
