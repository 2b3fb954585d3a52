// SPDX-License-Identifier: MPL-2.0
use serde::Deserialize;

/// One screenshot in the project gallery.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GalleryItem {
    /// Stable identifier, unique within a gallery.
    pub id: u32,
    pub title: String,
    pub description: String,
    /// Resource locator of the screenshot (file path, possibly relative).
    #[serde(rename = "image")]
    pub image_ref: String,
}

impl GalleryItem {
    pub fn new(
        id: u32,
        title: impl Into<String>,
        description: impl Into<String>,
        image_ref: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            image_ref: image_ref.into(),
        }
    }
}
