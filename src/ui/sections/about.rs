// SPDX-License-Identifier: MPL-2.0
//! "About me" section: owner name and personal information card.

use super::{frame, Message, ViewContext};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{Column, Container, Row, Text};
use iced::{Element, Length};

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let about = &ctx.content.about;

    let entries = about.info.iter().fold(
        Column::new().spacing(spacing::SM),
        |column, entry| {
            column.push(
                Row::new()
                    .spacing(spacing::XS)
                    .push(
                        Text::new(format!("{}:", entry.label))
                            .size(typography::BODY_LG)
                            .color(ctx.colors.accent),
                    )
                    .push(Text::new(entry.value.as_str()).size(typography::BODY_LG)),
            )
        },
    );

    let card = Container::new(
        Column::new()
            .spacing(spacing::MD)
            .push(Text::new(about.name.as_str()).size(typography::TITLE_MD))
            .push(
                Text::new(ctx.i18n.tr("about-personal-info"))
                    .size(typography::TITLE_SM)
                    .color(ctx.colors.text_secondary),
            )
            .push(entries),
    )
    .width(Length::Fill)
    .padding(spacing::XL)
    .style(styles::container::card(ctx.colors));

    frame(ctx.i18n.tr("section-about-title"), ctx.colors, card)
}
