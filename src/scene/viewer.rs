//! Full-screen viewer overlay state for the selected image.

use crate::dataset::ImageRecord;

/// Where a click landed on the viewer overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayClick {
    /// The displayed image itself. Must not dismiss the overlay.
    Image,
    /// The dimmed backdrop around the image. Dismisses the overlay.
    Background,
}

/// What the overlay should display while a selection exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerOverlay {
    /// Record id of the selected image.
    pub id: u32,
    /// Asset to display full-screen: the high-resolution path, or the
    /// thumbnail when no high-resolution asset exists.
    pub path: String,
}

impl ViewerOverlay {
    /// Build the overlay state for a selected record.
    #[must_use]
    pub fn for_record(record: &ImageRecord) -> Self {
        Self {
            id: record.id,
            path: record.viewer_path().to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_highres_and_falls_back_to_thumb() {
        let mut record = ImageRecord {
            id: 4,
            thumb_path: "thumb/4.webp".to_owned(),
            highres_path: Some("full/4.jpg".to_owned()),
            position: [0.0; 3],
        };
        assert_eq!(ViewerOverlay::for_record(&record).path, "full/4.jpg");

        record.highres_path = None;
        assert_eq!(ViewerOverlay::for_record(&record).path, "thumb/4.webp");
    }
}
