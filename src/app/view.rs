// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application: navbar, the scrolling page of
//! sections, and the layers stacked above it (image viewer, toasts).

use super::Message;
use crate::config::GalleryConfig;
use crate::content::{Content, Resource};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::gallery;
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::notifications::{Manager, Toast};
use crate::ui::sections::{self, ViewContext as SectionsViewContext};
use crate::ui::styles;
use crate::ui::theming::{ColorScheme, ThemeMode};
use iced::widget::image::Handle;
use iced::{
    alignment::Horizontal,
    widget::{rule, scrollable, Column, Container, Stack},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub colors: &'a ColorScheme,
    pub theme_mode: ThemeMode,
    pub content: &'a Content,
    pub thumbnails: &'a [Option<Handle>],
    pub cv: Option<&'a Resource>,
    pub gallery: &'a gallery::State,
    pub gallery_config: &'a GalleryConfig,
    pub notifications: &'a Manager,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let navbar_view = navbar::view(NavbarViewContext {
        i18n: ctx.i18n,
        colors: ctx.colors,
        owner: &ctx.content.about.name,
        theme_mode: ctx.theme_mode,
    })
    .map(Message::Navbar);

    let page = Column::new()
        .push(navbar_view)
        .push(scrollable(page_body(&ctx)).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill);

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(
            Container::new(page)
                .width(Length::Fill)
                .height(Length::Fill)
                .style(styles::container::page(ctx.colors)),
        );

    if let Some(modal) = ctx.gallery.modal_view(gallery_env(&ctx)) {
        layers = layers.push(modal.map(Message::Gallery));
    }

    layers
        .push(Toast::view_overlay(ctx.notifications, ctx.i18n, ctx.colors).map(Message::Notification))
        .into()
}

fn gallery_env<'a>(ctx: &ViewContext<'a>) -> gallery::ViewEnv<'a> {
    gallery::ViewEnv {
        i18n: ctx.i18n,
        colors: ctx.colors,
        show_indicators: ctx.gallery_config.show_indicators(),
    }
}

fn page_body<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let sections_ctx = SectionsViewContext {
        i18n: ctx.i18n,
        colors: ctx.colors,
        content: ctx.content,
        thumbnails: ctx.thumbnails,
        cv: ctx.cv,
    };

    let gallery_view = sections::frame(
        ctx.i18n.tr("section-project-views-title"),
        ctx.colors,
        ctx.gallery.view(gallery_env(ctx)).map(Message::Gallery),
    );

    let column = Column::new()
        .width(Length::Fill)
        .spacing(spacing::XXL)
        .padding(spacing::XL)
        .align_x(Horizontal::Center)
        .push(sections::about::view(&sections_ctx).map(Message::Sections))
        .push(rule::horizontal(1))
        .push(sections::education::view(&sections_ctx).map(Message::Sections))
        .push(rule::horizontal(1))
        .push(sections::projects::view(&sections_ctx).map(Message::Sections))
        .push(rule::horizontal(1))
        .push(gallery_view)
        .push(rule::horizontal(1))
        .push(sections::skills::view(&sections_ctx).map(Message::Sections))
        .push(
            iced::widget::Text::new(format!("© {}", ctx.content.about.name))
                .size(typography::CAPTION)
                .color(ctx.colors.text_secondary),
        );

    Container::new(column).center_x(Length::Fill).into()
}
