//! The image dataset: an ordered, immutable list of photo records.
//!
//! Records are produced offline (thumbnailing + embedding projection)
//! and consumed here as opaque input. Dataset order is relevance order:
//! the visible set is always a prefix, and the prefetch window is the
//! contiguous slice just beyond it.

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::GalleriaError;

/// One photo in the collection. Loaded once at startup, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImageRecord {
    /// Stable identifier, unique within the dataset.
    pub id: u32,
    /// Path of the low-resolution thumbnail asset. Also the texture
    /// cache key.
    pub thumb_path: String,
    /// Path of the full-resolution asset, if one exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highres_path: Option<String>,
    /// Pre-computed world-space position `[x, y, z]`.
    pub position: [f32; 3],
}

impl ImageRecord {
    /// World-space target position as a vector.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }

    /// Path shown in the full-screen viewer: the high-resolution asset,
    /// falling back to the thumbnail when none exists.
    #[must_use]
    pub fn viewer_path(&self) -> &str {
        self.highres_path.as_deref().unwrap_or(&self.thumb_path)
    }
}

/// The full ordered photo collection.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<ImageRecord>,
}

impl Dataset {
    /// Wrap an already-loaded record list.
    #[must_use]
    pub fn new(records: Vec<ImageRecord>) -> Self {
        Self { records }
    }

    /// Load the dataset from a JSON array file.
    ///
    /// An empty array is valid and yields an empty scene.
    ///
    /// # Errors
    ///
    /// Returns [`GalleriaError::Io`] if the file cannot be read, or
    /// [`GalleriaError::DatasetParse`] if it is not a record array.
    pub fn load(path: &Path) -> Result<Self, GalleriaError> {
        let content = std::fs::read_to_string(path).map_err(GalleriaError::Io)?;
        let records: Vec<ImageRecord> = serde_json::from_str(&content)
            .map_err(|e| GalleriaError::DatasetParse(e.to_string()))?;
        log::info!("loaded dataset: {} records", records.len());
        Ok(Self { records })
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in dataset order.
    #[must_use]
    pub fn records(&self) -> &[ImageRecord] {
        &self.records
    }

    /// The visible set: the first `count` records in dataset order.
    /// `count` beyond the dataset length is truncated.
    #[must_use]
    pub fn visible(&self, count: usize) -> &[ImageRecord] {
        &self.records[..count.min(self.records.len())]
    }

    /// The prefetch window: up to `step` records starting right after the
    /// visible prefix of length `count`. Empty at the end of the dataset.
    #[must_use]
    pub fn prefetch_window(&self, count: usize, step: usize) -> &[ImageRecord] {
        let start = count.min(self.records.len());
        let end = count.saturating_add(step).min(self.records.len());
        &self.records[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn record(id: u32) -> ImageRecord {
        ImageRecord {
            id,
            thumb_path: format!("thumbnail/{id}.webp"),
            highres_path: None,
            position: [id as f32, 0.0, 0.0],
        }
    }

    fn dataset(n: u32) -> Dataset {
        Dataset::new((0..n).map(record).collect())
    }

    #[test]
    fn visible_is_prefix_in_dataset_order() {
        let ds = dataset(25);
        for count in 0..=30 {
            let visible = ds.visible(count);
            assert_eq!(visible.len(), count.min(25));
            for (i, r) in visible.iter().enumerate() {
                assert_eq!(r.id, i as u32);
            }
        }
    }

    #[test]
    fn prefetch_window_follows_visible_prefix() {
        // 25 records, visible 20, step 5 -> records 20..=24.
        let ds = dataset(25);
        let window = ds.prefetch_window(20, 5);
        assert_eq!(window.len(), 5);
        assert_eq!(window[0].id, 20);
        assert_eq!(window[4].id, 24);
    }

    #[test]
    fn prefetch_window_truncates_at_dataset_end() {
        let ds = dataset(25);
        assert!(ds.prefetch_window(25, 5).is_empty());
        assert_eq!(ds.prefetch_window(23, 5).len(), 2);
    }

    #[test]
    fn viewer_path_falls_back_to_thumbnail() {
        let mut r = record(7);
        assert_eq!(r.viewer_path(), "thumbnail/7.webp");
        r.highres_path = Some("full/7.jpg".to_owned());
        assert_eq!(r.viewer_path(), "full/7.jpg");
    }

    #[test]
    fn load_parses_json_array() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id": 1, "thumb_path": "t/1.webp",
                 "highres_path": "f/1.jpg", "position": [1.5, -2.0, 3.0]}},
                {{"id": 2, "thumb_path": "t/2.webp", "position": [0, 0, 0]}}]"#
        )
        .unwrap();

        let ds = Dataset::load(file.path()).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records()[0].position(), Vec3::new(1.5, -2.0, 3.0));
        assert_eq!(ds.records()[1].highres_path, None);
    }

    #[test]
    fn load_rejects_malformed_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not a dataset }}").unwrap();
        assert!(matches!(
            Dataset::load(file.path()),
            Err(GalleriaError::DatasetParse(_))
        ));
    }

    #[test]
    fn empty_dataset_is_valid() {
        let ds = dataset(0);
        assert!(ds.is_empty());
        assert!(ds.visible(20).is_empty());
        assert!(ds.prefetch_window(0, 5).is_empty());
    }
}
