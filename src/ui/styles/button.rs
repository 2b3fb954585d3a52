// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{opacity, palette::BLACK, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Round translucent button floating over an image (gallery arrows, expand, close).
pub fn overlay(
    text_color: Color,
    alpha_normal: f32,
    alpha_hover: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => alpha_hover,
            button::Status::Pressed => opacity::OVERLAY_BACKDROP,
            _ => alpha_normal,
        };

        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..BLACK })),
            text_color,
            border: Border {
                color: Color {
                    a: opacity::OVERLAY_SUBTLE,
                    ..Color::WHITE
                },
                width: 1.0,
                radius: radius::FULL.into(),
            },
            shadow: shadow::MD,
            ..button::Style::default()
        }
    }
}

/// Accent-filled pill used for primary actions (theme toggle, GitHub links).
pub fn accent(colors: &ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    let base = colors.accent;
    let hover = colors.accent_muted;
    let text = colors.surface_primary;
    move |_theme: &Theme, status: button::Status| {
        let background = match status {
            button::Status::Hovered => hover,
            button::Status::Disabled => Color { a: 0.5, ..base },
            _ => base,
        };
        button::Style {
            background: Some(Background::Color(background)),
            text_color: text,
            border: Border {
                radius: radius::FULL.into(),
                ..Border::default()
            },
            shadow: shadow::SM,
            ..button::Style::default()
        }
    }
}

/// Position indicator dot under the gallery image.
pub fn indicator(active: bool, colors: &ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    let idle = colors.text_primary;
    let accent = colors.accent;
    move |_theme: &Theme, status: button::Status| {
        let color = match (active, status) {
            (true, _) => accent,
            (false, button::Status::Hovered) => Color {
                a: opacity::OVERLAY_STRONG,
                ..idle
            },
            (false, _) => Color {
                a: opacity::INDICATOR_IDLE,
                ..idle
            },
        };
        button::Style {
            background: Some(Background::Color(color)),
            border: Border {
                radius: radius::FULL.into(),
                ..Border::default()
            },
            ..button::Style::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlay_button_alpha_changes_on_hover() {
        let theme = Theme::Dark;
        let style_fn = overlay(Color::WHITE, 0.5, 0.8);

        let normal = style_fn(&theme, button::Status::Active);
        let hover = style_fn(&theme, button::Status::Hovered);

        assert_ne!(normal.background, hover.background);
    }

    #[test]
    fn active_indicator_uses_accent() {
        let colors = ColorScheme::dark();
        let style = indicator(true, &colors)(&Theme::Dark, button::Status::Active);
        assert_eq!(style.background, Some(Background::Color(colors.accent)));
    }

    #[test]
    fn idle_indicator_is_translucent() {
        let colors = ColorScheme::dark();
        let style = indicator(false, &colors)(&Theme::Dark, button::Status::Active);
        match style.background {
            Some(Background::Color(color)) => assert!(color.a < 1.0),
            other => panic!("unexpected background {other:?}"),
        }
    }
}
