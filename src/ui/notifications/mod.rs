// SPDX-License-Identifier: MPL-2.0
//! Toast notifications for non-blocking user feedback.
//!
//! - Success/info toasts disappear after ~3s, warnings after ~5s, errors stay
//!   until dismissed
//! - At most 3 toasts are visible; the rest wait in a queue
//! - Messages are i18n keys resolved at render time

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, Severity};
pub use toast::Toast;
