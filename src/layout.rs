//! Layout modes and their per-mode configuration.
//!
//! A mode is a named way of framing the collection: camera placement,
//! field of view, which orbit controls are allowed, and the plane size
//! used for every image. The mode set is a closed enum; the config file
//! is validated against it at load, so an unconfigured mode is
//! unrepresentable at runtime (switching modes can never miss).
//!
//! Record positions are mode-independent: switching modes moves the
//! camera, never the images.

use std::fmt;
use std::path::Path;

use glam::Vec3;
use rustc_hash::FxHashMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::GalleriaError;

/// The closed set of layout modes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    /// Flat grid arrangement, camera pulled straight back.
    #[default]
    Grid,
    /// Spherical arrangement, camera inside the shell.
    Sphere,
}

impl LayoutMode {
    /// All modes, in UI presentation order.
    pub const ALL: [LayoutMode; 2] = [LayoutMode::Grid, LayoutMode::Sphere];

    /// The mode's wire/UI name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Grid => "grid",
            Self::Sphere => "sphere",
        }
    }
}

impl fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-mode layout configuration, supplied as opaque input data.
///
/// Field names mirror the configuration file's camelCase keys.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LayoutConfig {
    /// Camera rest position for this mode.
    pub camera_position: [f32; 3],
    /// Vertical field of view in degrees.
    pub camera_fov: f32,
    /// Whether scroll zoom is allowed.
    pub enable_zoom: bool,
    /// Whether panning is allowed.
    pub enable_pan: bool,
    /// Whether orbit rotation is allowed.
    pub enable_rotate: bool,
    /// Pan sensitivity multiplier.
    pub pan_speed: f32,
    /// Image plane size `[width, height]`.
    #[serde(rename = "planeGeometry_args")]
    pub plane_size: [f32; 2],
}

impl LayoutConfig {
    /// Camera rest position as a vector.
    #[must_use]
    pub fn camera_position(&self) -> Vec3 {
        Vec3::from_array(self.camera_position)
    }
}

/// The validated set of layout configurations, one per [`LayoutMode`].
#[derive(Debug, Clone)]
pub struct LayoutLibrary {
    configs: FxHashMap<LayoutMode, LayoutConfig>,
}

impl LayoutLibrary {
    /// Build a library from an explicit mode → config map.
    ///
    /// # Errors
    ///
    /// Returns [`GalleriaError::MissingMode`] if any [`LayoutMode`]
    /// variant has no entry.
    pub fn new(
        configs: FxHashMap<LayoutMode, LayoutConfig>,
    ) -> Result<Self, GalleriaError> {
        for mode in LayoutMode::ALL {
            if !configs.contains_key(&mode) {
                return Err(GalleriaError::MissingMode(mode));
            }
        }
        Ok(Self { configs })
    }

    /// Load the library from a JSON file mapping mode names to configs.
    ///
    /// # Errors
    ///
    /// Returns [`GalleriaError::Io`] if the file cannot be read,
    /// [`GalleriaError::LayoutParse`] on malformed JSON or unknown mode
    /// keys, and [`GalleriaError::MissingMode`] if a mode is absent.
    pub fn load(path: &Path) -> Result<Self, GalleriaError> {
        let content = std::fs::read_to_string(path).map_err(GalleriaError::Io)?;
        let configs: FxHashMap<LayoutMode, LayoutConfig> =
            serde_json::from_str(&content)
                .map_err(|e| GalleriaError::LayoutParse(e.to_string()))?;
        log::info!("loaded layout configs for {} modes", configs.len());
        Self::new(configs)
    }

    /// The configuration for `mode`. Always present by construction.
    #[must_use]
    pub fn config(&self, mode: LayoutMode) -> &LayoutConfig {
        // Validated in the constructor; the closed enum cannot grow a
        // variant the map lacks.
        &self.configs[&mode]
    }
}
