//! Runtime tunables with TOML preset support.
//!
//! Everything the UI overlay or a preset file may adjust lives here:
//! the reveal window (initial count, step, cap), animation damping
//! rates, the camera intro, and camera projection/control sensitivity.
//! All sub-structs use `#[serde(default)]` so partial TOML files (e.g.
//! only overriding `[reveal]`) work correctly. The JSON Schema exposes
//! the UI-facing subset to the overlay controls.

use std::path::Path;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::GalleriaError;

/// Top-level settings container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema)]
#[serde(default)]
pub struct Settings {
    /// Progressive-reveal window parameters.
    pub reveal: RevealOptions,
    /// Entry-animation damping parameters.
    pub animation: AnimationOptions,
    /// Camera fly-in parameters.
    pub intro: IntroOptions,
    /// Camera projection and control sensitivity.
    pub camera: CameraOptions,
}

/// How many images are visible and how the count grows.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Reveal", inline)]
#[serde(default)]
pub struct RevealOptions {
    /// Visible count at startup (also the lower bound).
    #[schemars(title = "Initial Images", range(min = 1, max = 100))]
    pub initial: usize,
    /// Images added or removed per UI step; also the prefetch window.
    #[schemars(title = "Step", range(min = 1, max = 50))]
    pub step: usize,
    /// Hard cap on the visible count (the dataset length caps further).
    #[schemars(title = "Max Images", range(min = 1, max = 2000))]
    pub max: usize,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            initial: 20,
            step: 5,
            max: 200,
        }
    }
}

/// Damping rates for the image entry animation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Animation", inline)]
#[serde(default)]
pub struct AnimationOptions {
    /// Position damping rate (higher converges faster).
    #[schemars(title = "Fly Speed", range(min = 0.5, max = 10.0), extend("step" = 0.5))]
    pub position_rate: f32,
    /// Opacity damping rate.
    #[schemars(title = "Fade Speed", range(min = 0.25, max = 5.0), extend("step" = 0.25))]
    pub fade_rate: f32,
    /// Distance below which position snaps to target and the object
    /// settles. Avoids perpetual sub-pixel jitter from the asymptote.
    #[schemars(skip)]
    pub snap_distance: f32,
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            position_rate: 2.0,
            fade_rate: 1.0,
            snap_distance: 0.1,
        }
    }
}

/// One-shot camera fly-in on mount and mode switch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera Intro", inline)]
#[serde(default)]
pub struct IntroOptions {
    /// Start offset along +Z from the rest position.
    #[schemars(title = "Fly-in Distance", range(min = 0.0, max = 200.0), extend("step" = 5.0))]
    pub offset: f32,
    /// Per-frame lerp blend factor (intentionally simple, not damped).
    #[schemars(title = "Fly-in Blend", range(min = 0.01, max = 0.3), extend("step" = 0.01))]
    pub blend: f32,
    /// Distance below which the intro snaps to the rest position and
    /// completes.
    #[schemars(skip)]
    pub arrive_distance: f32,
}

impl Default for IntroOptions {
    fn default() -> Self {
        Self {
            offset: 50.0,
            blend: 0.05,
            arrive_distance: 0.1,
        }
    }
}

/// Camera projection and control sensitivity. Per-mode pan speed and
/// control permissions come from the layout config, not from here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
pub struct CameraOptions {
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Rotation sensitivity multiplier.
    #[schemars(title = "Rotate Speed", range(min = 0.1, max = 2.0), extend("step" = 0.05))]
    pub rotate_speed: f32,
    /// Zoom sensitivity multiplier.
    #[schemars(title = "Zoom Speed", range(min = 0.01, max = 0.5), extend("step" = 0.01))]
    pub zoom_speed: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            znear: 0.1,
            zfar: 1000.0,
            rotate_speed: 0.5,
            zoom_speed: 0.1,
        }
    }
}

impl Settings {
    /// Generate JSON Schema describing the UI-exposed settings.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Settings)
    }

    /// Load settings from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`GalleriaError::Io`] or [`GalleriaError::SettingsParse`].
    pub fn load(path: &Path) -> Result<Self, GalleriaError> {
        let content = std::fs::read_to_string(path).map_err(GalleriaError::Io)?;
        toml::from_str(&content)
            .map_err(|e| GalleriaError::SettingsParse(e.to_string()))
    }

    /// Save settings to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`GalleriaError::Io`] or [`GalleriaError::SettingsParse`].
    pub fn save(&self, path: &Path) -> Result<(), GalleriaError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| GalleriaError::SettingsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(GalleriaError::Io)?;
        }
        std::fs::write(path, content).map_err(GalleriaError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let settings = Settings::default();
        let toml_str = toml::to_string_pretty(&settings).unwrap();
        let parsed: Settings = toml::from_str(&toml_str).unwrap();
        assert_eq!(settings, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[reveal]
step = 10
";
        let settings: Settings = toml::from_str(toml_str).unwrap();
        assert_eq!(settings.reveal.step, 10);
        // Everything else should be default
        assert_eq!(settings.reveal.initial, 20);
        assert_eq!(settings.reveal.max, 200);
        assert_eq!(settings.animation.position_rate, 2.0);
        assert_eq!(settings.intro.offset, 50.0);
    }

    #[test]
    fn save_and_load_preset() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("presets").join("close-up.toml");

        let mut settings = Settings::default();
        settings.animation.position_rate = 4.0;
        settings.save(&path).unwrap();

        let loaded = Settings::load(&path).unwrap();
        assert_eq!(loaded, settings);
        assert_eq!(
            Settings::list_presets(&dir.path().join("presets")),
            vec!["close-up".to_owned()]
        );
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value = serde_json::to_value(Settings::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("reveal"));
        assert!(props.contains_key("animation"));
        assert!(props.contains_key("intro"));
        assert!(props.contains_key("camera"));

        // Internal epsilons are not UI-exposed
        let animation = &props["animation"]["properties"];
        assert!(animation.get("position_rate").is_some());
        assert!(animation.get("snap_distance").is_none());
    }
}
