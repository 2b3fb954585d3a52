// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the page sections, the
//! gallery and user preferences.
//!
//! The `App` struct wires together content, localization and settings, and
//! translates messages into side effects such as config persistence or
//! clipboard writes.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::content::{self, Content, Resource};
use crate::i18n::fluent::I18n;
use crate::ui::gallery;
use crate::ui::notifications::{self, Notification};
use crate::ui::sections::projects;
use crate::ui::theming::{ColorScheme, ThemeMode};
use iced::widget::image::Handle;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::{Path, PathBuf};

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    /// Where settings are saved; `None` uses the platform config directory.
    config_dir: Option<PathBuf>,
    content: Content,
    gallery: gallery::State,
    /// Project preview images, aligned with `content.projects`.
    thumbnails: Vec<Option<Handle>>,
    /// Where the CV bytes live, resolved at startup.
    cv: Option<Resource>,
    theme_mode: ThemeMode,
    /// Resolved once per theme change; `System` mode queries the OS.
    colors: ColorScheme,
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("owner", &self.content.about.name)
            .field("theme_mode", &self.theme_mode)
            .field("gallery_items", &self.gallery.controller().map_or(0, |c| c.len()))
            .finish()
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(config::WINDOW_DEFAULT_WIDTH, config::WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(
            config::MIN_WINDOW_WIDTH,
            config::MIN_WINDOW_HEIGHT,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot closure; the flags are consumed once
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        let content = Content::default();
        Self {
            i18n: I18n::default(),
            config: Config::default(),
            config_dir: None,
            gallery: gallery::State::new(&content),
            content,
            thumbnails: Vec::new(),
            cv: None,
            theme_mode: ThemeMode::System,
            colors: ColorScheme::dark(),
            notifications: notifications::Manager::new(),
        }
    }
}

/// Loads the portfolio, preferring `custom` when given. Falls back to the
/// bundled content and then to an empty portfolio, returning the i18n key of
/// the problem to report.
fn load_content(custom: Option<&Path>) -> (Content, Option<&'static str>) {
    let mut warning = None;

    if let Some(path) = custom {
        match content::load_from_path(path) {
            Ok(content) => {
                tracing::info!(path = %path.display(), "loaded custom portfolio");
                return (content, None);
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "custom portfolio rejected");
                warning = Some("notification-content-fallback");
            }
        }
    }

    match content::load_embedded() {
        Ok(content) => (content, warning),
        Err(err) => {
            tracing::error!(error = %err, "bundled portfolio is invalid");
            (Content::default(), Some(err.i18n_key()))
        }
    }
}

fn cv_resource(content: &Content) -> Option<Resource> {
    content.cv.as_ref().map(|cv| content.resource(&cv.file))
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);
        let (content, content_warning) =
            load_content(flags.content_path.as_deref().map(Path::new));

        let theme_mode = config.general.theme_mode;
        let mut app = App {
            i18n,
            gallery: gallery::State::new(&content),
            thumbnails: projects::load_thumbnails(&content),
            cv: cv_resource(&content),
            content,
            theme_mode,
            colors: theme_mode.colors(),
            config,
            config_dir: None,
            notifications: notifications::Manager::new(),
        };

        if let Some(key) = config_warning {
            app.notifications.push(Notification::warning(key));
        }
        if let Some(key) = content_warning {
            app.notifications.push(Notification::error(key));
        }

        tracing::info!(
            locale = %app.i18n.current_locale(),
            owner = %app.content.about.name,
            projects = app.content.projects.len(),
            "portfolio ready"
        );

        (app, Task::none())
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        let owner = &self.content.about.name;
        if owner.is_empty() {
            app_name
        } else {
            let page = self
                .i18n
                .tr_with_args("window-title-owner", &[("name", owner.as_str())]);
            format!("{page} - {app_name}")
        }
    }

    fn theme(&self) -> Theme {
        self.colors.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(self.notifications.has_notifications()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            config: &mut self.config,
            config_dir: self.config_dir.as_deref(),
            content: &self.content,
            cv: self.cv.as_ref(),
            gallery: &mut self.gallery,
            theme_mode: &mut self.theme_mode,
            colors: &mut self.colors,
            notifications: &mut self.notifications,
        };

        match message {
            Message::Gallery(gallery_message) => {
                update::handle_gallery_message(&mut ctx, gallery_message)
            }
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut ctx, navbar_message)
            }
            Message::Sections(sections_message) => {
                update::handle_sections_message(&mut ctx, sections_message)
            }
            Message::Notification(notification_message) => {
                update::handle_notification_message(&mut ctx, &notification_message)
            }
            Message::CvSaveDialogResult(destination) => {
                update::handle_cv_save_result(&mut ctx, destination)
            }
            Message::Tick(_) => update::handle_tick(&mut ctx),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            colors: &self.colors,
            theme_mode: self.theme_mode,
            content: &self.content,
            thumbnails: &self.thumbnails,
            cv: self.cv.as_ref(),
            gallery: &self.gallery,
            gallery_config: &self.config.gallery,
            notifications: &self.notifications,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::{gallery as gallery_ui, navbar, sections};
    use tempfile::tempdir;

    fn test_app() -> App {
        let content = content::load_embedded().expect("bundled content");
        App {
            gallery: gallery::State::new(&content),
            cv: cv_resource(&content),
            content,
            ..App::default()
        }
    }

    fn visible_keys(app: &App) -> Vec<String> {
        app.notifications
            .visible()
            .map(|n| n.message_key().to_string())
            .collect()
    }

    #[test]
    fn bundled_content_drives_gallery() {
        let mut app = test_app();
        let _ = app.update(Message::Gallery(gallery_ui::Message::SelectPrevious));

        let controller = app.gallery.controller().expect("gallery ready");
        assert_eq!(controller.current_index(), controller.len() - 1);
    }

    #[test]
    fn keyboard_open_then_escape() {
        let mut app = test_app();
        let _ = app.update(Message::Gallery(gallery_ui::Message::OpenCurrent));
        assert!(app.gallery.is_modal_open());
        let _ = app.update(Message::Gallery(gallery_ui::Message::CloseModal));
        assert!(!app.gallery.is_modal_open());
    }

    #[test]
    fn copying_a_link_notifies() {
        let mut app = test_app();
        let _ = app.update(Message::Sections(sections::Message::OpenLink(
            "https://github.com/example/project".into(),
        )));
        assert!(app.notifications.has_notifications());
    }

    #[test]
    fn saving_the_cv_writes_the_bundled_file() {
        let dir = tempdir().expect("tempdir");
        let destination = dir.path().join("CV.pdf");
        let mut app = test_app();

        let _ = app.update(Message::CvSaveDialogResult(Some(destination.clone())));

        let saved = std::fs::read(&destination).expect("saved cv");
        assert!(saved.starts_with(b"%PDF"));
        assert_eq!(visible_keys(&app), vec!["notification-cv-saved"]);
    }

    #[test]
    fn cancelled_cv_dialog_is_silent() {
        let mut app = test_app();
        let _ = app.update(Message::CvSaveDialogResult(None));
        assert!(!app.notifications.has_notifications());
    }

    #[test]
    fn cv_save_into_missing_directory_reports_error() {
        let dir = tempdir().expect("tempdir");
        let mut app = test_app();

        let _ = app.update(Message::CvSaveDialogResult(Some(
            dir.path().join("absent").join("CV.pdf"),
        )));
        assert_eq!(visible_keys(&app), vec!["notification-cv-save-error"]);
    }

    #[test]
    fn missing_cv_is_reported_instead_of_opening_dialog() {
        let dir = tempdir().expect("tempdir");
        let mut app = test_app();
        app.cv = Some(Resource::Missing(dir.path().join("cv.pdf")));

        let _ = app.update(Message::Sections(sections::Message::SaveCv));
        assert_eq!(visible_keys(&app), vec!["notification-cv-missing"]);
    }

    #[test]
    fn tick_leaves_fresh_toasts_visible() {
        let mut app = test_app();
        let _ = app.update(Message::Sections(sections::Message::OpenLink(
            "https://github.com/example/project".into(),
        )));
        let _ = app.update(Message::Tick(std::time::Instant::now()));
        assert_eq!(app.notifications.visible_count(), 1);
    }

    #[test]
    fn theme_toggle_is_persisted() {
        let dir = tempdir().expect("tempdir");
        let mut app = test_app();
        app.config_dir = Some(dir.path().to_path_buf());
        app.theme_mode = ThemeMode::Light;

        let _ = app.update(Message::Navbar(navbar::Message::ToggleTheme));
        assert_eq!(app.theme_mode, ThemeMode::Dark);
        assert!(!app.notifications.has_notifications());

        let (saved, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
        assert!(warning.is_none());
        assert_eq!(saved.general.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn title_includes_owner() {
        let app = test_app();
        assert!(app.title().contains(&app.content.about.name));
    }

    #[test]
    fn invalid_custom_content_falls_back_to_bundled() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "this is = = not toml").expect("write");

        let (content, warning) = load_content(Some(&path));
        assert_eq!(warning, Some("notification-content-fallback"));
        assert!(!content.project_views.is_empty());
    }

    #[test]
    fn valid_custom_content_is_used() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("mine.toml");
        std::fs::write(&path, "[about]\nname = \"Someone Else\"\n").expect("write");

        let (content, warning) = load_content(Some(&path));
        assert_eq!(warning, None);
        assert_eq!(content.about.name, "Someone Else");
        assert!(matches!(gallery::State::new(&content), gallery::State::Empty));
    }
}
