// SPDX-License-Identifier: MPL-2.0
//! Education entries and the CV card.

use super::{frame, Message, ViewContext};
use crate::content::{Cv, Education, Resource};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{button, Column, Container, Text};
use iced::{Element, Length};

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut column = ctx
        .content
        .education
        .iter()
        .fold(Column::new().spacing(spacing::LG), |column, entry| {
            column.push(entry_card(entry, ctx.colors))
        });

    if let Some(cv) = &ctx.content.cv {
        column = column.push(cv_card(cv, ctx.cv, ctx.i18n, ctx.colors));
    }

    frame(ctx.i18n.tr("section-education-title"), ctx.colors, column)
}

fn entry_card<'a>(entry: &'a Education, colors: &ColorScheme) -> Element<'a, Message> {
    Container::new(
        Column::new()
            .spacing(spacing::XS)
            .push(Text::new(entry.title.as_str()).size(typography::TITLE_SM))
            .push(
                Text::new(entry.institution.as_str())
                    .size(typography::BODY_LG)
                    .color(colors.accent),
            )
            .push(
                Text::new(entry.period.as_str())
                    .size(typography::CAPTION)
                    .color(colors.text_secondary),
            )
            .push(Text::new(entry.description.as_str()).size(typography::BODY)),
    )
    .width(Length::Fill)
    .padding(spacing::LG)
    .style(styles::container::card(colors))
    .into()
}

/// CV title, description, resolved file and the save button. The button is
/// disabled when the file can't be found.
fn cv_card<'a>(
    cv: &'a Cv,
    resource: Option<&Resource>,
    i18n: &I18n,
    colors: &ColorScheme,
) -> Element<'a, Message> {
    let available = resource.is_some_and(Resource::is_available);
    let location = resource.map_or_else(|| cv.file.clone(), Resource::label);
    let caption = if available {
        i18n.tr_with_args("education-cv-file", &[("file", location.as_str())])
    } else {
        i18n.tr_with_args("education-cv-missing", &[("file", location.as_str())])
    };

    Container::new(
        Column::new()
            .spacing(spacing::SM)
            .push(Text::new(cv.title.as_str()).size(typography::TITLE_SM))
            .push(Text::new(cv.description.as_str()).size(typography::BODY))
            .push(
                Text::new(caption)
                    .size(typography::CAPTION)
                    .color(colors.text_secondary),
            )
            .push(
                button(Text::new(i18n.tr("education-cv-download")).size(typography::BODY))
                    .padding([spacing::XS, spacing::LG])
                    .style(styles::button::accent(colors))
                    .on_press_maybe(available.then_some(Message::SaveCv)),
            ),
    )
    .width(Length::Fill)
    .padding(spacing::LG)
    .style(styles::container::card(colors))
    .into()
}
