// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.

use super::Message;
use crate::config::{self, Config};
use crate::content::{self, Content, Resource};
use crate::ui::gallery;
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::notifications::{self, Notification};
use crate::ui::sections::{self, Event as SectionsEvent};
use crate::ui::theming::{ColorScheme, ThemeMode};
use iced::Task;
use std::path::{Path, PathBuf};

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub config: &'a mut Config,
    pub config_dir: Option<&'a Path>,
    pub content: &'a Content,
    pub cv: Option<&'a Resource>,
    pub gallery: &'a mut gallery::State,
    pub theme_mode: &'a mut ThemeMode,
    pub colors: &'a mut ColorScheme,
    pub notifications: &'a mut notifications::Manager,
}

pub fn handle_gallery_message(
    ctx: &mut UpdateContext<'_>,
    message: gallery::Message,
) -> Task<Message> {
    ctx.gallery.update(message, &ctx.config.gallery);
    Task::none()
}

pub fn handle_navbar_message(
    ctx: &mut UpdateContext<'_>,
    message: navbar::Message,
) -> Task<Message> {
    match navbar::update(message, ctx.theme_mode) {
        NavbarEvent::ThemeChanged(mode) => {
            tracing::info!(?mode, "theme changed");
            *ctx.colors = mode.colors();
            ctx.config.general.theme_mode = mode;
            persist_config(ctx);
        }
    }
    Task::none()
}

pub fn handle_sections_message(
    ctx: &mut UpdateContext<'_>,
    message: sections::Message,
) -> Task<Message> {
    match sections::update(message) {
        SectionsEvent::CopyLink(url) => {
            tracing::info!(%url, "project link copied to clipboard");
            ctx.notifications
                .push(Notification::success("notification-link-copied").with_arg("url", url.as_str()));
            iced::clipboard::write(url)
        }
        SectionsEvent::SaveCv => open_cv_save_dialog(ctx),
    }
}

/// Asks where to save the CV; the answer comes back as
/// [`Message::CvSaveDialogResult`].
fn open_cv_save_dialog(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let (Some(cv), Some(resource)) = (&ctx.content.cv, ctx.cv) else {
        tracing::warn!("portfolio has no CV to save");
        return Task::none();
    };
    if !resource.is_available() {
        tracing::warn!(source = %resource.label(), "CV file not found");
        ctx.notifications.push(
            Notification::error("notification-cv-missing")
                .with_arg("file", resource.label()),
        );
        return Task::none();
    }

    let filename = cv.suggested_name();
    let extension = Path::new(&filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_string);

    Task::perform(
        async move {
            let mut dialog = rfd::AsyncFileDialog::new().set_file_name(&filename);
            if let Some(ext) = extension {
                dialog = dialog.add_filter(ext.to_uppercase(), &[ext.as_str()]);
            }
            dialog.save_file().await.map(|h| h.path().to_path_buf())
        },
        Message::CvSaveDialogResult,
    )
}

pub fn handle_cv_save_result(
    ctx: &mut UpdateContext<'_>,
    destination: Option<PathBuf>,
) -> Task<Message> {
    let Some(destination) = destination else {
        tracing::debug!("CV save cancelled");
        return Task::none();
    };
    let Some(resource) = ctx.cv else {
        return Task::none();
    };

    match content::export(resource, &destination) {
        Ok(_) => {
            ctx.notifications.push(
                Notification::success("notification-cv-saved")
                    .with_arg("path", destination.display().to_string()),
            );
        }
        Err(err) => {
            tracing::warn!(destination = %destination.display(), error = %err, "CV save failed");
            ctx.notifications.push(Notification::error("notification-cv-save-error"));
        }
    }
    Task::none()
}

pub fn handle_notification_message(
    ctx: &mut UpdateContext<'_>,
    message: &notifications::NotificationMessage,
) -> Task<Message> {
    ctx.notifications.handle_message(message);
    Task::none()
}

pub fn handle_tick(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    ctx.notifications.tick();
    Task::none()
}

fn persist_config(ctx: &mut UpdateContext<'_>) {
    let base_dir = ctx.config_dir.map(Path::to_path_buf);
    if let Err(err) = config::save_with_override(ctx.config, base_dir) {
        tracing::warn!(error = %err, "failed to save settings");
        ctx.notifications
            .push(Notification::warning("notification-config-save-error"));
    }
}
