// SPDX-License-Identifier: MPL-2.0
//! Open/closed state of the full-window image viewer.

/// The viewer is either closed or showing exactly one image reference.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Modal {
    #[default]
    Closed,
    Open { image_ref: String },
}

impl Modal {
    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self, Modal::Open { .. })
    }

    /// Image shown by the viewer; `None` while closed.
    #[must_use]
    pub fn image_ref(&self) -> Option<&str> {
        match self {
            Modal::Open { image_ref } => Some(image_ref),
            Modal::Closed => None,
        }
    }

    /// Opens the viewer, replacing any image already shown.
    pub fn open(&mut self, image_ref: impl Into<String>) {
        *self = Modal::Open {
            image_ref: image_ref.into(),
        };
    }

    pub fn close(&mut self) {
        *self = Modal::Closed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_closed_without_image() {
        let modal = Modal::default();
        assert!(!modal.is_open());
        assert_eq!(modal.image_ref(), None);
    }

    #[test]
    fn open_then_close_clears_image() {
        let mut modal = Modal::default();
        modal.open("a.png");
        assert!(modal.is_open());
        assert_eq!(modal.image_ref(), Some("a.png"));

        modal.close();
        assert_eq!(modal, Modal::Closed);
    }

    #[test]
    fn reopening_overwrites_image() {
        let mut modal = Modal::default();
        modal.open("a.png");
        modal.open("b.png");
        assert_eq!(modal.image_ref(), Some("b.png"));
    }

    #[test]
    fn closing_a_closed_modal_is_a_no_op() {
        let mut modal = Modal::Closed;
        modal.close();
        assert_eq!(modal, Modal::Closed);
    }
}
