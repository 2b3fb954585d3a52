// SPDX-License-Identifier: MPL-2.0
//! Full-window image viewer layered above the page.
//!
//! The backdrop captures every click so nothing underneath reacts while the
//! viewer is open. Clicking the backdrop emits [`Message::BackdropPressed`];
//! the close button always emits [`Message::CloseModal`].

use super::component::{Message, Slide, ViewEnv};
use crate::ui::design_tokens::{opacity, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, image, mouse_area, opaque, Container, Stack, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    ContentFit, Element, Length,
};

pub fn view<'a>(env: &ViewEnv<'a>, slide: &'a Slide) -> Element<'a, Message> {
    let picture: Element<'a, Message> = match &slide.handle {
        Some(handle) => image(handle.clone())
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        None => Text::new(env.i18n.tr_with_args(
            "gallery-image-missing",
            &[("path", &slide.source)],
        ))
        .size(typography::BODY_LG)
        .color(env.colors.overlay_text)
        .into(),
    };

    let backdrop = mouse_area(
        Container::new(picture)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::XXL)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .style(styles::overlay::backdrop(env.colors)),
    )
    .on_press(Message::BackdropPressed);

    let close = button(
        Text::new("×")
            .size(typography::TITLE_MD)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center),
    )
    .width(Length::Fixed(sizing::GALLERY_EXPAND))
    .height(Length::Fixed(sizing::GALLERY_EXPAND))
    .style(styles::button::overlay(
        env.colors.overlay_text,
        opacity::OVERLAY_MEDIUM,
        opacity::OVERLAY_HOVER,
    ))
    .on_press(Message::CloseModal);

    let close_row = Container::new(close)
        .width(Length::Fill)
        .padding(spacing::LG)
        .align_x(Horizontal::Right)
        .align_y(Vertical::Top);

    opaque(
        Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(backdrop)
            .push(close_row),
    )
}
