// SPDX-License-Identifier: MPL-2.0
//! Skill categories with a percentage bar per skill.

use super::{frame, Message, ViewContext};
use crate::content::{Skill, SkillCategory, MAX_SKILL_LEVEL};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{Column, Container, Row, Text};
use iced::{Color, Element, Length};

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let categories = ctx.content.skill_categories.iter().fold(
        Row::new().spacing(spacing::LG),
        |row, category| row.push(category_card(category, ctx.i18n, ctx.colors)),
    );

    frame(ctx.i18n.tr("section-skills-title"), ctx.colors, categories)
}

fn category_card<'a>(
    category: &'a SkillCategory,
    i18n: &I18n,
    colors: &ColorScheme,
) -> Element<'a, Message> {
    let skills = category.skills.iter().fold(
        Column::new().spacing(spacing::MD),
        |column, skill| column.push(skill_row(skill, i18n, colors)),
    );

    Container::new(
        Column::new()
            .spacing(spacing::MD)
            .push(
                Text::new(category.title.as_str())
                    .size(typography::TITLE_SM)
                    .color(colors.accent),
            )
            .push(skills),
    )
    .width(Length::FillPortion(1))
    .padding(spacing::LG)
    .style(styles::container::card(colors))
    .into()
}

fn skill_row<'a>(skill: &'a Skill, i18n: &I18n, colors: &ColorScheme) -> Element<'a, Message> {
    let level = skill.level();
    let label = Row::new()
        .push(
            Container::new(Text::new(skill.name.as_str()).size(typography::BODY))
                .width(Length::Fill),
        )
        .push(
            Text::new(i18n.tr_with_args("skill-level", &[("level", &level.to_string())]))
                .size(typography::CAPTION)
                .color(colors.text_secondary),
        );

    Column::new()
        .spacing(spacing::XXS)
        .push(label)
        .push(bar(level, colors))
        .into()
}

/// Filled portion proportional to the level; zero-width portions are left
/// out.
fn bar<'a>(level: u8, colors: &ColorScheme) -> Element<'a, Message> {
    let (filled, rest) = bar_portions(level);
    let track = Color {
        a: opacity::INDICATOR_IDLE,
        ..colors.text_primary
    };

    let mut row = Row::new()
        .width(Length::Fill)
        .height(Length::Fixed(sizing::SKILL_BAR_HEIGHT));
    if filled > 0 {
        row = row.push(
            Container::new(Text::new(""))
                .width(Length::FillPortion(filled))
                .height(Length::Fill)
                .style(styles::container::bar(colors.accent)),
        );
    }
    if rest > 0 {
        row = row.push(
            Container::new(Text::new(""))
                .width(Length::FillPortion(rest))
                .height(Length::Fill)
                .style(styles::container::bar(track)),
        );
    }
    row.into()
}

fn bar_portions(level: u8) -> (u16, u16) {
    let filled = u16::from(level.min(MAX_SKILL_LEVEL));
    (filled, u16::from(MAX_SKILL_LEVEL) - filled)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn portions_always_sum_to_max() {
        for level in [0, 1, 50, 99, 100] {
            let (filled, rest) = bar_portions(level);
            assert_eq!(filled + rest, u16::from(MAX_SKILL_LEVEL));
        }
    }

    #[test]
    fn over_max_is_full() {
        assert_eq!(bar_portions(180), (100, 0));
    }
}
