// SPDX-License-Identifier: MPL-2.0
//! Inline gallery pane: main image with caption, navigation arrows, expand
//! button, position counter and indicator dots.

use super::component::{Message, Slide, ViewEnv};
use crate::gallery::GalleryController;
use crate::ui::design_tokens::{opacity, palette, radius, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, image, mouse_area, Column, Container, Row, Stack, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    ContentFit, Element, Length,
};

pub fn view<'a>(
    env: &ViewEnv<'a>,
    controller: &'a GalleryController,
    slides: &'a [Slide],
) -> Element<'a, Message> {
    let index = controller.current_index();
    let item = controller.current_item();

    let picture: Element<'a, Message> = match slides.get(index).and_then(|s| s.handle.as_ref()) {
        Some(handle) => mouse_area(
            image(handle.clone())
                .content_fit(ContentFit::Contain)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .on_press(Message::OpenModal(item.image_ref.clone()))
        .into(),
        None => {
            let path = slides
                .get(index)
                .map(|slide| slide.source.clone())
                .unwrap_or_else(|| item.image_ref.clone());
            Container::new(
                Text::new(env.i18n.tr_with_args("gallery-image-missing", &[("path", &path)]))
                    .size(typography::BODY)
                    .color(env.colors.text_secondary),
            )
            .center(Length::Fill)
            .into()
        }
    };

    let base = Container::new(picture)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::overlay::image_frame(env.colors));

    let stack = Stack::new()
        .width(Length::Fill)
        .height(Length::Fixed(sizing::GALLERY_HEIGHT))
        .push(base)
        .push(caption(env, controller))
        .push(arrows(env))
        .push(top_bar(env, controller));

    let mut column = Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .push(stack);

    if env.show_indicators && controller.len() > 1 {
        column = column.push(indicators(env, controller));
    }

    column.into()
}

/// Title and description band anchored to the bottom of the image.
fn caption<'a>(env: &ViewEnv<'a>, controller: &'a GalleryController) -> Element<'a, Message> {
    let item = controller.current_item();
    let text = Column::new()
        .spacing(spacing::XS)
        .push(Text::new(item.title.as_str()).size(typography::TITLE_MD))
        .push(Text::new(item.description.as_str()).size(typography::BODY_LG));

    Container::new(
        Container::new(text)
            .width(Length::Fill)
            .padding(spacing::LG)
            .style(styles::overlay::caption(env.colors)),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_y(Vertical::Bottom)
    .into()
}

/// Previous/next arrows, vertically centered at both edges.
fn arrows<'a>(env: &ViewEnv<'a>) -> Element<'a, Message> {
    let arrow = |glyph: &'static str, message: Message| {
        button(
            Text::new(glyph)
                .size(typography::TITLE_SM)
                .align_x(Horizontal::Center)
                .align_y(Vertical::Center),
        )
        .width(Length::Fixed(sizing::GALLERY_ARROW))
        .height(Length::Fixed(sizing::GALLERY_ARROW))
        .style(styles::button::overlay(
            env.colors.overlay_text,
            opacity::OVERLAY_MEDIUM,
            opacity::OVERLAY_HOVER,
        ))
        .on_press(message)
    };

    let row = Row::new()
        .width(Length::Fill)
        .align_y(Vertical::Center)
        .padding(spacing::MD)
        .push(arrow("◀", Message::SelectPrevious))
        .push(Container::new(Text::new("")).width(Length::Fill))
        .push(arrow("▶", Message::SelectNext));

    Container::new(row)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_y(Vertical::Center)
        .into()
}

/// Position counter on the left and expand button on the right.
fn top_bar<'a>(env: &ViewEnv<'a>, controller: &'a GalleryController) -> Element<'a, Message> {
    let position = env.i18n.tr_with_args(
        "gallery-position",
        &[
            ("current", &(controller.current_index() + 1).to_string()),
            ("total", &controller.len().to_string()),
        ],
    );
    let counter = Container::new(Text::new(position).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::overlay::indicator(radius::MD));

    let expand = button(
        Text::new("⤢")
            .size(typography::BODY_LG)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center),
    )
    .width(Length::Fixed(sizing::GALLERY_EXPAND))
    .height(Length::Fixed(sizing::GALLERY_EXPAND))
    .style(styles::button::overlay(
        palette::WHITE,
        opacity::OVERLAY_MEDIUM,
        opacity::OVERLAY_HOVER,
    ))
    .on_press(Message::OpenModal(controller.current_item().image_ref.clone()));

    let row = Row::new()
        .width(Length::Fill)
        .align_y(Vertical::Center)
        .padding(spacing::LG)
        .push(counter)
        .push(Container::new(Text::new("")).width(Length::Fill))
        .push(expand);

    Container::new(row)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_y(Vertical::Top)
        .into()
}

/// One dot per item; the dot of the current item is highlighted.
fn indicators<'a>(env: &ViewEnv<'a>, controller: &'a GalleryController) -> Element<'a, Message> {
    let current = controller.current_index();
    let dots = (0..controller.len()).fold(
        Row::new().spacing(spacing::XS).align_y(Vertical::Center),
        |row, index| {
            let active = index == current;
            let size = if active {
                sizing::INDICATOR_DOT_ACTIVE
            } else {
                sizing::INDICATOR_DOT
            };
            row.push(
                button(Text::new(""))
                    .width(Length::Fixed(size))
                    .height(Length::Fixed(size))
                    .padding(0)
                    .style(styles::button::indicator(active, env.colors))
                    .on_press(Message::GoToIndex(index)),
            )
        },
    );

    Container::new(dots)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .into()
}
