// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering notifications in the bottom-right corner.

use super::manager::{Manager, Message};
use super::notification::{Notification, Severity};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, radius, shadow, sizing, spacing, typography};
use crate::ui::theming::ColorScheme;
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Background, Border, Color, Element, Length, Theme};

pub struct Toast;

impl Toast {
    pub fn view<'a>(
        notification: &'a Notification,
        i18n: &I18n,
        colors: &ColorScheme,
    ) -> Element<'a, Message> {
        let accent = notification.severity().color();

        let args: Vec<(&str, &str)> = notification
            .message_args()
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        let message_text = if args.is_empty() {
            i18n.tr(notification.message_key())
        } else {
            i18n.tr_with_args(notification.message_key(), &args)
        };

        let glyph = Text::new(Self::severity_glyph(notification.severity()))
            .size(typography::BODY_LG)
            .color(accent);

        let dismiss = button(Text::new("×").size(typography::BODY_LG))
            .on_press(Message::Dismiss(notification.id()))
            .padding([0.0, spacing::XS])
            .style(dismiss_button_style(colors));

        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(glyph)
            .push(
                Container::new(Text::new(message_text).size(typography::BODY))
                    .width(Length::Fill),
            )
            .push(dismiss);

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(toast_container_style(colors, accent))
            .into()
    }

    /// Stack of visible toasts; an empty, zero-sized container when there
    /// are none.
    pub fn view_overlay<'a>(
        manager: &'a Manager,
        i18n: &I18n,
        colors: &ColorScheme,
    ) -> Element<'a, Message> {
        let toasts: Vec<Element<'a, Message>> = manager
            .visible()
            .map(|notification| Self::view(notification, i18n, colors))
            .collect();

        if toasts.is_empty() {
            return Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        }

        Container::new(
            Column::with_children(toasts)
                .spacing(spacing::XS)
                .align_x(alignment::Horizontal::Right),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Bottom)
        .padding(spacing::MD)
        .into()
    }

    fn severity_glyph(severity: Severity) -> &'static str {
        match severity {
            Severity::Success => "✔",
            Severity::Info => "ℹ",
            Severity::Warning | Severity::Error => "⚠",
        }
    }
}

fn toast_container_style(
    colors: &ColorScheme,
    accent: Color,
) -> impl Fn(&Theme) -> container::Style {
    let background = colors.surface_secondary;
    let text = colors.text_primary;
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        text_color: Some(text),
        border: Border {
            color: accent,
            width: 2.0,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}

fn dismiss_button_style(colors: &ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    let text = colors.text_primary;
    move |_theme: &Theme, status: button::Status| {
        let background = match status {
            button::Status::Hovered => Some(Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..text
            })),
            button::Status::Pressed => Some(Background::Color(Color {
                a: opacity::OVERLAY_MEDIUM,
                ..text
            })),
            button::Status::Active | button::Status::Disabled => None,
        };
        button::Style {
            background,
            text_color: text,
            border: Border {
                radius: radius::SM.into(),
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
    fn toast_container_uses_accent_border() {
        let colors = ColorScheme::dark();
        let accent = Severity::Warning.color();
        let style = toast_container_style(&colors, accent)(&Theme::Dark);

        assert_eq!(style.border.color, accent);
        assert!(style.background.is_some());
    }

    #[test]
    fn dismiss_button_is_transparent_until_hovered() {
        let colors = ColorScheme::light();
        let style_fn = dismiss_button_style(&colors);
        assert!(style_fn(&Theme::Light, button::Status::Active).background.is_none());
        assert!(style_fn(&Theme::Light, button::Status::Hovered).background.is_some());
    }
}
