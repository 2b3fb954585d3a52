// SPDX-License-Identifier: MPL-2.0
//! Gallery state controller.
//!
//! Holds the fixed item list together with the mutable view state (current
//! index and image viewer) and exposes the only operations allowed to change
//! them.

use super::item::GalleryItem;
use super::modal::Modal;
use super::navigation;
use crate::error::{Error, Result};

/// Owner of the gallery view state.
///
/// Invariants:
/// - `items` is non-empty and never changes after construction.
/// - `current_index < items.len()`.
/// - When the viewer is open, its image is the `image_ref` of one of `items`.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryController {
    items: Vec<GalleryItem>,
    current_index: usize,
    modal: Modal,
}

impl GalleryController {
    /// Creates a controller positioned on the first item with the viewer closed.
    ///
    /// Returns [`Error::EmptyGallery`] if `items` is empty.
    pub fn new(items: Vec<GalleryItem>) -> Result<Self> {
        if items.is_empty() {
            return Err(Error::EmptyGallery);
        }
        Ok(Self {
            items,
            current_index: 0,
            modal: Modal::Closed,
        })
    }

    pub fn items(&self) -> &[GalleryItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false; kept for symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// The item at the current index.
    pub fn current_item(&self) -> &GalleryItem {
        &self.items[self.current_index]
    }

    pub fn modal_open(&self) -> bool {
        self.modal.is_open()
    }

    pub fn modal_image_ref(&self) -> Option<&str> {
        self.modal.image_ref()
    }

    /// Jumps to `index`. Out-of-range indices are clamped to the last item.
    pub fn go_to_index(&mut self, index: usize) {
        let last = self.items.len() - 1;
        if index > last {
            tracing::warn!(index, last, "gallery index out of range, clamping");
        }
        self.current_index = index.min(last);
        tracing::debug!(index = self.current_index, "gallery jumped");
    }

    pub fn select_previous(&mut self) {
        self.current_index = navigation::previous_index(self.current_index, self.items.len());
        tracing::debug!(index = self.current_index, "gallery previous");
    }

    pub fn select_next(&mut self) {
        self.current_index = navigation::next_index(self.current_index, self.items.len());
        tracing::debug!(index = self.current_index, "gallery next");
    }

    /// Opens the image viewer on `image_ref`, replacing any image already shown.
    ///
    /// References that match no gallery item are ignored.
    pub fn open_modal(&mut self, image_ref: &str) {
        if !self.items.iter().any(|item| item.image_ref == image_ref) {
            tracing::warn!(image_ref, "ignoring viewer request for unknown image");
            return;
        }
        self.modal.open(image_ref);
        tracing::debug!(image_ref, "image viewer opened");
    }

    /// Opens the image viewer on the current item.
    pub fn open_current(&mut self) {
        let image_ref = self.current_item().image_ref.clone();
        self.open_modal(&image_ref);
    }

    pub fn close_modal(&mut self) {
        if self.modal.is_open() {
            tracing::debug!("image viewer closed");
        }
        self.modal.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(count: u32) -> Vec<GalleryItem> {
        (1..=count)
            .map(|id| {
                GalleryItem::new(
                    id,
                    format!("Project {id}"),
                    format!("Description {id}"),
                    format!("./projectImages/{id}.png"),
                )
            })
            .collect()
    }

    fn five() -> GalleryController {
        GalleryController::new(items(5)).expect("non-empty gallery")
    }

    #[test]
    fn empty_item_list_is_rejected() {
        let result = GalleryController::new(Vec::new());
        assert_eq!(result, Err(Error::EmptyGallery));
    }

    #[test]
    fn new_controller_starts_at_first_item_closed() {
        let gallery = five();
        assert_eq!(gallery.current_index(), 0);
        assert!(!gallery.modal_open());
        assert_eq!(gallery.modal_image_ref(), None);
        assert_eq!(gallery.current_item().id, 1);
    }

    #[test]
    fn go_to_index_sets_every_valid_index() {
        let mut gallery = five();
        for i in 0..gallery.len() {
            gallery.go_to_index(i);
            assert_eq!(gallery.current_index(), i);
        }
    }

    #[test]
    fn go_to_index_clamps_out_of_range() {
        let mut gallery = five();
        gallery.go_to_index(42);
        assert_eq!(gallery.current_index(), 4);
    }

    #[test]
    fn select_next_cycles_back_to_start() {
        let mut gallery = five();
        for start in 0..gallery.len() {
            gallery.go_to_index(start);
            for _ in 0..gallery.len() {
                gallery.select_next();
            }
            assert_eq!(gallery.current_index(), start);
        }
    }

    #[test]
    fn select_previous_undoes_select_next() {
        let mut gallery = five();
        for start in 0..gallery.len() {
            gallery.go_to_index(start);
            gallery.select_next();
            gallery.select_previous();
            assert_eq!(gallery.current_index(), start);
        }
    }

    #[test]
    fn boundaries_wrap_both_ways() {
        let mut gallery = five();
        gallery.select_previous();
        assert_eq!(gallery.current_index(), 4);
        gallery.select_next();
        assert_eq!(gallery.current_index(), 0);
    }

    #[test]
    fn five_item_walkthrough() {
        let mut gallery = five();
        gallery.select_next();
        assert_eq!(gallery.current_index(), 1);
        for _ in 0..3 {
            gallery.select_next();
        }
        assert_eq!(gallery.current_index(), 4);
        gallery.select_next();
        assert_eq!(gallery.current_index(), 0);
        gallery.select_previous();
        assert_eq!(gallery.current_index(), 4);
    }

    #[test]
    fn modal_open_overwrite_close() {
        let mut gallery = GalleryController::new(vec![
            GalleryItem::new(1, "A", "first", "a.png"),
            GalleryItem::new(2, "B", "second", "b.png"),
        ])
        .expect("non-empty gallery");

        gallery.open_modal("a.png");
        assert!(gallery.modal_open());
        assert_eq!(gallery.modal_image_ref(), Some("a.png"));

        gallery.open_modal("b.png");
        assert!(gallery.modal_open());
        assert_eq!(gallery.modal_image_ref(), Some("b.png"));

        gallery.close_modal();
        assert!(!gallery.modal_open());
        assert_eq!(gallery.modal_image_ref(), None);
    }

    #[test]
    fn unknown_image_does_not_open_viewer() {
        let mut gallery = five();
        gallery.open_modal("elsewhere.png");
        assert!(!gallery.modal_open());
    }

    #[test]
    fn open_current_uses_current_item_image() {
        let mut gallery = five();
        gallery.select_next();
        gallery.open_current();
        assert_eq!(gallery.modal_image_ref(), Some("./projectImages/2.png"));
    }

    #[test]
    fn navigation_keeps_viewer_state() {
        let mut gallery = five();
        gallery.open_current();
        gallery.select_next();
        assert_eq!(gallery.modal_image_ref(), Some("./projectImages/1.png"));
    }
}
