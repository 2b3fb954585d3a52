// SPDX-License-Identifier: MPL-2.0
//! Gallery widgets: the inline carousel and the full-window image viewer.

pub mod component;
mod empty_state;
mod modal;
mod pane;

pub use component::{Message, State, ViewEnv};
