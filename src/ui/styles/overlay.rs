// SPDX-License-Identifier: MPL-2.0
//! Overlay styles for the gallery caption, position counter and image viewer.

use crate::ui::design_tokens::{opacity, palette::WHITE, radius};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Dimmed full-window backdrop of the image viewer.
pub fn backdrop(colors: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let background = colors.overlay_background;
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        ..Default::default()
    }
}

/// Caption band at the bottom of the gallery image.
pub fn caption(colors: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let text = colors.overlay_text;
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_STRONG,
            ..Color::BLACK
        })),
        text_color: Some(text),
        border: Border {
            radius: radius::XL.into(),
            ..Border::default()
        },
        ..Default::default()
    }
}

/// Small rounded indicator such as the "2 / 5" position counter.
pub fn indicator(rad: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_STRONG,
            ..Color::BLACK
        })),
        text_color: Some(WHITE),
        border: Border {
            color: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..WHITE
            },
            width: 1.0,
            radius: rad.into(),
        },
        ..Default::default()
    }
}

/// Frame behind the main gallery image.
pub fn image_frame(colors: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let background = colors.surface_card;
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        border: Border {
            radius: radius::XL.into(),
            ..Border::default()
        },
        ..Default::default()
    }
}
