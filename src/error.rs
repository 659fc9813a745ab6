//! Crate-level error types.

use std::fmt;

use crate::gpu::render_context::RenderContextError;
use crate::layout::LayoutMode;

/// Errors produced by the galleria crate.
#[derive(Debug)]
pub enum GalleriaError {
    /// GPU context initialization failure.
    Gpu(RenderContextError),
    /// Failed to parse the image dataset file.
    DatasetParse(String),
    /// Failed to parse the layout configuration file.
    LayoutParse(String),
    /// Layout configuration is missing an entry for a mode.
    MissingMode(LayoutMode),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// Failed to spawn a texture loader thread.
    ThreadSpawn(std::io::Error),
    /// TOML settings parsing/serialization failure.
    SettingsParse(String),
}

impl fmt::Display for GalleriaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gpu(e) => write!(f, "GPU error: {e}"),
            Self::DatasetParse(msg) => {
                write!(f, "dataset parse error: {msg}")
            }
            Self::LayoutParse(msg) => {
                write!(f, "layout config parse error: {msg}")
            }
            Self::MissingMode(mode) => {
                write!(f, "layout config has no entry for mode '{mode}'")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::ThreadSpawn(e) => {
                write!(f, "failed to spawn loader thread: {e}")
            }
            Self::SettingsParse(msg) => {
                write!(f, "settings parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for GalleriaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Gpu(e) => Some(e),
            Self::Io(e) | Self::ThreadSpawn(e) => Some(e),
            _ => None,
        }
    }
}

impl From<RenderContextError> for GalleriaError {
    fn from(e: RenderContextError) -> Self {
        Self::Gpu(e)
    }
}

impl From<std::io::Error> for GalleriaError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
