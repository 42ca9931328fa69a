//! Audience image lookup
//!
//! Images follow the fixed naming convention `audience_{index}.png`. A
//! missing image is never an error; callers show a placeholder instead.

use std::path::PathBuf;

use crate::core::dataset::AudienceIndex;
use crate::error::Result;

/// Default directory holding the audience images
pub const DEFAULT_IMAGES_DIR: &str = "images";

/// Relative image path for a 1-based audience index
pub fn image_path_for(index: usize) -> Result<PathBuf> {
    AudienceIndex::new(index).map(audience_image_path)
}

/// Relative image path for an already validated index
pub fn audience_image_path(index: AudienceIndex) -> PathBuf {
    PathBuf::from(format!("audience_{}.png", index))
}

/// Placeholder shown when an audience image is absent
pub fn missing_image_message(index: AudienceIndex) -> String {
    format!("Image for Audience {} not found", index)
}

/// Lookup of audience images
#[cfg_attr(test, mockall::automock)]
pub trait ImageLookup {
    /// Whether the image for this audience is present
    fn image_exists(&self, index: AudienceIndex) -> bool;

    /// Where the image for this audience is expected
    fn image_path(&self, index: AudienceIndex) -> PathBuf;
}

/// Images stored in a local directory
#[derive(Debug, Clone)]
pub struct ImageDir {
    root: PathBuf,
}

impl ImageDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl Default for ImageDir {
    fn default() -> Self {
        Self::new(DEFAULT_IMAGES_DIR)
    }
}

impl ImageLookup for ImageDir {
    fn image_exists(&self, index: AudienceIndex) -> bool {
        let path = self.image_path(index);
        let exists = path.is_file();
        if !exists {
            tracing::debug!("Audience image not found: {}", path.display());
        }
        exists
    }

    fn image_path(&self, index: AudienceIndex) -> PathBuf {
        self.root.join(audience_image_path(index))
    }
}
