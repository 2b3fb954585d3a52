// SPDX-License-Identifier: MPL-2.0
//! User interface components following the Elm-style "state down, messages
//! up" pattern.
//!
//! - [`gallery`] - Project screenshot carousel and full-window image viewer
//! - [`sections`] - About, education, projects and skills views
//! - [`images`] - Image handles for bundled or on-disk content files
//! - [`navbar`] - Top bar with the theme toggle
//! - [`notifications`] - Toast notification system for user feedback
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod gallery;
pub mod images;
pub mod navbar;
pub mod notifications;
pub mod sections;
pub mod styles;
pub mod theming;
