//! Scene composition: visible set, object lifecycle, camera rig,
//! selection, and batch-preload orchestration.

use std::sync::Arc;

use glam::Vec2;

use super::image_object::ImageObject;
use super::picking;
use super::viewer::{OverlayClick, ViewerOverlay};
use super::{GalleryFrame, Sprite};
use crate::camera::{Camera, CameraIntro, OrbitController};
use crate::dataset::Dataset;
use crate::error::GalleriaError;
use crate::input::MouseButton;
use crate::layout::{LayoutLibrary, LayoutMode};
use crate::settings::Settings;
use crate::texture::{BatchLoader, TextureCache, TextureSource};

/// Owns the live scene and is the sole mutator of the visible set, the
/// selection, and the current mode.
///
/// Per frame, call [`advance`](Self::advance) once, then
/// [`frame`](Self::frame) to collect the sprites for the draw pass.
pub struct SceneComposer<S: TextureSource> {
    dataset: Dataset,
    layouts: LayoutLibrary,
    settings: Settings,

    mode: LayoutMode,
    image_count: usize,
    objects: Vec<ImageObject>,
    selected: Option<u32>,

    cache: TextureCache<S::Handle>,
    loader: BatchLoader<S>,

    orbit: OrbitController,
    intro: CameraIntro,
}

impl<S: TextureSource> SceneComposer<S> {
    /// Compose the startup scene: the initial visible prefix in the
    /// default mode, with the camera intro armed and one batch warming
    /// the visible prefix plus the first reveal increment.
    ///
    /// # Errors
    ///
    /// Returns [`GalleriaError::ThreadSpawn`] if the warm-up batch
    /// thread cannot be spawned.
    pub fn new(
        dataset: Dataset,
        layouts: LayoutLibrary,
        settings: Settings,
        source: Arc<S>,
        aspect: f32,
    ) -> Result<Self, GalleriaError> {
        let mode = LayoutMode::default();
        let layout = layouts.config(mode).clone();

        let image_count = settings
            .reveal
            .initial
            .min(settings.reveal.max)
            .min(dataset.len());
        let objects: Vec<ImageObject> = dataset
            .visible(image_count)
            .iter()
            .cloned()
            .map(ImageObject::new)
            .collect();

        let orbit = OrbitController::new(&layout, &settings.camera, aspect);
        let intro = CameraIntro::new(layout.camera_position(), &settings.intro);

        let cache = TextureCache::new();
        let mut loader = BatchLoader::new(source);
        // Warm the visible prefix and the first increment window in one
        // batch, so the first increment is instant once it enables.
        let warm_end = image_count.saturating_add(settings.reveal.step);
        loader.preload(dataset.visible(warm_end), &cache)?;

        log::info!(
            "scene composed: {image_count}/{} images visible, mode {mode}",
            dataset.len()
        );
        Ok(Self {
            dataset,
            layouts,
            settings,
            mode,
            image_count,
            objects,
            selected: None,
            cache,
            loader,
            orbit,
            intro,
        })
    }

    // -- per-frame ---------------------------------------------------------

    /// Advance one frame: apply settled texture loads, move the camera
    /// intro, and update every image object's animation/billboarding.
    pub fn advance(&mut self, dt: f32) {
        self.loader.pump(&mut self.cache);

        if !self.intro.is_done() {
            self.orbit.camera.eye = self.intro.advance();
            self.orbit.camera.target = glam::Vec3::ZERO;
        }

        let eye = self.orbit.camera.eye;
        for obj in &mut self.objects {
            obj.update(dt, eye, &self.settings.animation);
        }
    }

    /// Collect the draw list for this frame, resolving each sprite's
    /// texture through the cache (misses issue detached direct loads).
    pub fn frame(&mut self) -> GalleryFrame<S::Handle> {
        let size = self.layouts.config(self.mode).plane_size;
        let mut sprites = Vec::with_capacity(self.objects.len());
        for obj in &self.objects {
            let texture =
                self.loader.request(&obj.record().thumb_path, &self.cache);
            sprites.push(Sprite {
                id: obj.id(),
                position: obj.position(),
                orientation: obj.orientation(),
                opacity: obj.opacity(),
                size,
                texture,
            });
        }
        GalleryFrame { sprites }
    }

    // -- visible count / mode ----------------------------------------------

    /// Change the visible count, reconciling objects and prefetching the
    /// next increment window.
    ///
    /// Retained objects keep their in-flight animation; added records
    /// materialize fresh at the origin; removed objects are dropped
    /// immediately, discarding any in-progress animation.
    ///
    /// # Errors
    ///
    /// Returns [`GalleriaError::ThreadSpawn`] if the prefetch thread
    /// cannot be spawned (the count change itself has already applied).
    pub fn set_image_count(&mut self, requested: usize) -> Result<(), GalleriaError> {
        let count = requested
            .min(self.settings.reveal.max)
            .min(self.dataset.len());
        if count == self.image_count {
            return Ok(());
        }

        if count < self.image_count {
            self.objects.truncate(count);
        } else {
            for record in &self.dataset.visible(count)[self.image_count..] {
                self.objects.push(ImageObject::new(record.clone()));
            }
        }
        log::debug!("visible count {} -> {count}", self.image_count);
        self.image_count = count;

        let window = self
            .dataset
            .prefetch_window(count, self.settings.reveal.step);
        self.loader.preload(window, &self.cache)
    }

    /// Switch the layout mode: atomically swap camera framing, orbit
    /// permissions, and plane size, and re-arm the camera intro toward
    /// the new rest position. Image positions and the texture cache are
    /// untouched.
    pub fn set_mode(&mut self, mode: LayoutMode) {
        if mode == self.mode {
            return;
        }
        log::debug!("mode {} -> {mode}", self.mode);
        self.mode = mode;
        let layout = self.layouts.config(mode).clone();
        self.orbit.apply_layout(&layout);
        self.intro
            .restart(layout.camera_position(), &self.settings.intro);
    }

    // -- selection ---------------------------------------------------------

    /// Route a pointer-down into the scene. Returns `true` when an image
    /// consumed the event (selection changed, nothing propagates to the
    /// background).
    pub fn pointer_down(
        &mut self,
        button: MouseButton,
        cursor: Vec2,
        viewport: Vec2,
    ) -> bool {
        let hovered = self.pick(cursor, viewport);
        if let Some(id) = hovered {
            if let Some(obj) = self.objects.iter().find(|o| o.id() == id) {
                if obj.pointer_down(button) {
                    log::debug!("image selected: {id}");
                    self.selected = Some(id);
                    return true;
                }
            }
            return false;
        }
        // Background click clears, primary button only
        if button == MouseButton::Left {
            self.selected = None;
        }
        false
    }

    /// The visible image under `cursor`, if any.
    #[must_use]
    pub fn pick(&self, cursor: Vec2, viewport: Vec2) -> Option<u32> {
        picking::pick(
            &self.orbit.camera,
            cursor,
            viewport,
            &self.objects,
            self.layouts.config(self.mode).plane_size,
        )
    }

    /// The viewer overlay to render, while a selection exists.
    #[must_use]
    pub fn viewer(&self) -> Option<ViewerOverlay> {
        let id = self.selected?;
        self.dataset
            .records()
            .iter()
            .find(|r| r.id == id)
            .map(ViewerOverlay::for_record)
    }

    /// Route a click on the viewer overlay. Only the backdrop dismisses;
    /// a click on the displayed image keeps the overlay open.
    pub fn overlay_click(&mut self, click: OverlayClick) {
        if click == OverlayClick::Background {
            self.selected = None;
        }
    }

    // -- camera ------------------------------------------------------------

    /// Frame every visible image in the viewport.
    pub fn fit_visible(&mut self) {
        let targets: Vec<_> = self.objects.iter().map(ImageObject::target).collect();
        self.orbit.fit_to_positions(&targets);
    }

    /// Update the projection aspect after a viewport resize.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.orbit.resize(width, height);
    }

    // -- accessors ---------------------------------------------------------

    /// Whether a reveal batch is still loading. The UI disables the
    /// increment control while this is true.
    #[must_use]
    pub fn is_loading_next_batch(&self) -> bool {
        self.loader.is_loading()
    }

    /// The current layout mode.
    #[must_use]
    pub fn mode(&self) -> LayoutMode {
        self.mode
    }

    /// The current visible count.
    #[must_use]
    pub fn image_count(&self) -> usize {
        self.image_count
    }

    /// The live image objects, in visible-set order.
    #[must_use]
    pub fn objects(&self) -> &[ImageObject] {
        &self.objects
    }

    /// The selected record id, if any.
    #[must_use]
    pub fn selected(&self) -> Option<u32> {
        self.selected
    }

    /// The current camera.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.orbit.camera
    }

    /// Mutable access to the orbit controller for input routing.
    pub fn orbit_mut(&mut self) -> &mut OrbitController {
        &mut self.orbit
    }

    /// Whether the camera intro has landed.
    #[must_use]
    pub fn intro_done(&self) -> bool {
        self.intro.is_done()
    }

    /// The session texture cache.
    #[must_use]
    pub fn cache(&self) -> &TextureCache<S::Handle> {
        &self.cache
    }
}
