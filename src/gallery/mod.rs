// SPDX-License-Identifier: MPL-2.0
//! Project gallery state: the item list, circular navigation and the
//! full-window image viewer.
//!
//! [`GalleryController`] is the single owner of the view state; the UI reads
//! it through shared borrows and mutates it only through the controller's
//! operations.

pub mod controller;
pub mod item;
pub mod modal;
pub mod navigation;

pub use controller::GalleryController;
pub use item::GalleryItem;
pub use modal::Modal;
