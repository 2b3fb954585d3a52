// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Full-window page background.
pub fn page(colors: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let background = colors.surface_primary;
    let text = colors.text_primary;
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        text_color: Some(text),
        ..Default::default()
    }
}

/// Top navigation bar.
pub fn navbar(colors: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let background = colors.surface_secondary;
    let text = colors.text_primary;
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        text_color: Some(text),
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Rounded "glass" card used by every section.
pub fn card(colors: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let background = colors.surface_card;
    let text = colors.text_primary;
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        text_color: Some(text),
        border: Border {
            radius: radius::LG.into(),
            ..Border::default()
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}

/// Pill-shaped technology tag.
pub fn tag(colors: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let background = colors.accent_muted;
    let text = colors.surface_primary;
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        text_color: Some(text),
        border: Border {
            radius: radius::FULL.into(),
            ..Border::default()
        },
        ..Default::default()
    }
}

/// Solid rounded fill; used for progress bar track and fill.
pub fn bar(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(color)),
        border: Border {
            radius: radius::SM.into(),
            ..Border::default()
        },
        ..Default::default()
    }
}

/// Short accent underline below section titles.
pub fn title_underline(colors: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    bar(colors.accent)
}
