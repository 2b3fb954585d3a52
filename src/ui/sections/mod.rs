// SPDX-License-Identifier: MPL-2.0
//! Portfolio page sections.
//!
//! Every section is a pure view over [`Content`]; they emit two requests:
//! sharing a project link and saving the CV.

pub mod about;
pub mod education;
pub mod projects;
pub mod skills;

use crate::content::{Content, Resource};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::image::Handle;
use iced::widget::{Column, Container, Text};
use iced::{alignment::Horizontal, Element, Length};

/// Contextual data needed to render the sections.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub colors: &'a ColorScheme,
    pub content: &'a Content,
    /// Preview image per project, aligned with `content.projects`.
    pub thumbnails: &'a [Option<Handle>],
    /// Resolved CV file, when the portfolio has one.
    pub cv: Option<&'a Resource>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    OpenLink(String),
    SaveCv,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    CopyLink(String),
    SaveCv,
}

#[must_use]
pub fn update(message: Message) -> Event {
    match message {
        Message::OpenLink(url) => Event::CopyLink(url),
        Message::SaveCv => Event::SaveCv,
    }
}

/// Centered section title with the accent underline, followed by the body.
pub fn frame<'a, M: 'a>(
    title: String,
    colors: &ColorScheme,
    body: impl Into<Element<'a, M>>,
) -> Element<'a, M> {
    let underline = Container::new(Text::new(""))
        .width(Length::Fixed(80.0))
        .height(Length::Fixed(3.0))
        .style(styles::container::title_underline(colors));

    Column::new()
        .width(Length::Fill)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .push(
            Column::new()
                .spacing(spacing::XS)
                .align_x(Horizontal::Center)
                .push(
                    Text::new(title)
                        .size(typography::TITLE_LG)
                        .color(colors.accent),
                )
                .push(underline),
        )
        .push(body)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_link_becomes_copy_event() {
        let url = "https://github.com/example/repo".to_string();
        assert_eq!(update(Message::OpenLink(url.clone())), Event::CopyLink(url));
    }

    #[test]
    fn save_cv_is_forwarded() {
        assert_eq!(update(Message::SaveCv), Event::SaveCv);
    }
}
