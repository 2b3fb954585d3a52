// SPDX-License-Identifier: MPL-2.0
//! Top bar with the portfolio owner's name, a caption listing the page
//! sections and the theme toggle.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::{ColorScheme, ThemeMode};
use iced::{
    alignment::Vertical,
    widget::{button, Container, Row, Text},
    Element, Length,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub colors: &'a ColorScheme,
    pub owner: &'a str,
    pub theme_mode: ThemeMode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    ToggleTheme,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    ThemeChanged(ThemeMode),
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message, theme_mode: &mut ThemeMode) -> Event {
    match message {
        Message::ToggleTheme => {
            *theme_mode = theme_mode.toggled();
            Event::ThemeChanged(*theme_mode)
        }
    }
}

const SECTION_KEYS: [&str; 5] = [
    "navbar-about",
    "navbar-education",
    "navbar-projects",
    "navbar-project-views",
    "navbar-skills",
];

const SECTION_SEPARATOR: &str = " · ";

/// Section names in page order, as one line of text.
pub fn section_summary(i18n: &I18n) -> String {
    SECTION_KEYS
        .iter()
        .map(|key| i18n.tr(key))
        .collect::<Vec<_>>()
        .join(SECTION_SEPARATOR)
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let owner = Text::new(ctx.owner)
        .size(typography::TITLE_SM)
        .color(ctx.colors.accent);

    // Not interactive: the page scrolls as a whole.
    let sections = Text::new(section_summary(ctx.i18n))
        .size(typography::CAPTION)
        .color(ctx.colors.text_secondary);

    let mode = ctx.i18n.tr(ctx.theme_mode.i18n_key());
    let theme_button = button(
        Text::new(ctx.i18n.tr_with_args("navbar-theme", &[("mode", &mode)])).size(typography::BODY),
    )
    .padding([spacing::XS, spacing::MD])
    .style(styles::button::accent(ctx.colors))
    .on_press(Message::ToggleTheme);

    let row = Row::new()
        .width(Length::Fill)
        .spacing(spacing::XL)
        .align_y(Vertical::Center)
        .push(Container::new(owner).width(Length::Fill))
        .push(sections)
        .push(theme_button);

    Container::new(row)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::NAVBAR_HEIGHT))
        .padding([0.0, spacing::LG])
        .align_y(Vertical::Center)
        .style(styles::container::navbar(ctx.colors))
        .into()
}
