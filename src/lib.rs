// SPDX-License-Identifier: MPL-2.0
//! `iced_folio` is a personal portfolio built with the Iced GUI framework.
//!
//! It renders the owner's biography, education, projects and skills, and a
//! circular carousel of project screenshots with a full-window image viewer.
//! Text is localized with Fluent and preferences are kept in a TOML file.

#![doc(html_root_url = "https://docs.rs/iced_folio/0.1.0")]

pub mod app;
pub mod config;
pub mod content;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod ui;
