// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::gallery;
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::sections;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Gallery(gallery::Message),
    Navbar(navbar::Message),
    Sections(sections::Message),
    Notification(notifications::NotificationMessage),
    /// Destination chosen in the CV save dialog; `None` when cancelled.
    CvSaveDialogResult(Option<PathBuf>),
    /// Periodic tick for toast auto-dismiss.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `es`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_FOLIO_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional portfolio TOML replacing the bundled content.
    pub content_path: Option<String>,
}
