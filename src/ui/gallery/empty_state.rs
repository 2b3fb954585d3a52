// SPDX-License-Identifier: MPL-2.0
//! Placeholder shown in place of the carousel when the portfolio lists no
//! project views.

use super::component::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{Column, Container, Text};
use iced::{alignment, Color, Element, Length};

pub fn view<'a>(i18n: &I18n, colors: &ColorScheme) -> Element<'a, Message> {
    let icon = Text::new("🖼").size(typography::TITLE_LG * 2.0);

    let title = Text::new(i18n.tr("gallery-empty-title"))
        .size(typography::TITLE_MD)
        .color(colors.text_primary);

    let subtitle = Text::new(i18n.tr("gallery-empty-subtitle"))
        .size(typography::BODY)
        .color(Color {
            a: 0.7,
            ..colors.text_secondary
        });

    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .push(icon)
        .push(title)
        .push(subtitle);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::GALLERY_HEIGHT))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::overlay::image_frame(colors))
        .into()
}
