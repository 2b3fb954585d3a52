// SPDX-License-Identifier: MPL-2.0
//! Project cards laid out in rows.

use super::{frame, Message, ViewContext};
use crate::content::{Content, Project};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::images;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::image::Handle;
use iced::widget::{button, image, Column, Container, Row, Text};
use iced::{alignment::Horizontal, ContentFit, Element, Length};

const CARDS_PER_ROW: usize = 3;

/// Loads preview handles for every project; missing files map to `None`.
pub fn load_thumbnails(content: &Content) -> Vec<Option<Handle>> {
    content
        .projects
        .iter()
        .map(|project| images::handle(&content.resource(&project.image)))
        .collect()
}

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let projects = &ctx.content.projects;

    let grid = projects
        .chunks(CARDS_PER_ROW)
        .enumerate()
        .fold(Column::new().spacing(spacing::LG), |grid, (row_index, chunk)| {
            let row = chunk.iter().enumerate().fold(
                Row::new().spacing(spacing::LG),
                |row, (offset, project)| {
                    let thumbnail = ctx
                        .thumbnails
                        .get(row_index * CARDS_PER_ROW + offset)
                        .and_then(Option::as_ref);
                    row.push(card(project, thumbnail, ctx.i18n, ctx.colors))
                },
            );
            grid.push(row)
        });

    frame(
        ctx.i18n.tr("section-projects-title"),
        ctx.colors,
        Container::new(grid)
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    )
}

fn card<'a>(
    project: &'a Project,
    thumbnail: Option<&Handle>,
    i18n: &I18n,
    colors: &ColorScheme,
) -> Element<'a, Message> {
    let preview: Element<'a, Message> = match thumbnail {
        Some(handle) => image(handle.clone())
            .content_fit(ContentFit::Cover)
            .width(Length::Fill)
            .height(Length::Fixed(sizing::PROJECT_THUMBNAIL_HEIGHT))
            .into(),
        None => Container::new(
            Text::new(i18n.tr("project-no-image"))
                .size(typography::CAPTION)
                .color(colors.text_secondary),
        )
        .center_x(Length::Fill)
        .center_y(Length::Fixed(sizing::PROJECT_THUMBNAIL_HEIGHT))
        .into(),
    };

    let tags = project.tech_stack.iter().fold(
        Row::new().spacing(spacing::XXS),
        |row, tech| {
            row.push(
                Container::new(Text::new(tech.as_str()).size(typography::CAPTION))
                    .padding([spacing::XXS, spacing::XS])
                    .style(styles::container::tag(colors)),
            )
        },
    );

    let mut body = Column::new()
        .spacing(spacing::SM)
        .push(preview)
        .push(Text::new(project.title.as_str()).size(typography::TITLE_SM))
        .push(Text::new(project.description.as_str()).size(typography::BODY))
        .push(tags);

    if let Some(url) = &project.github_url {
        body = body.push(
            button(Text::new(i18n.tr("project-github-button")).size(typography::BODY))
                .padding([spacing::XS, spacing::LG])
                .style(styles::button::accent(colors))
                .on_press(Message::OpenLink(url.clone())),
        );
    }

    Container::new(body)
        .width(Length::Fixed(sizing::PROJECT_CARD_WIDTH))
        .padding(spacing::MD)
        .style(styles::container::card(colors))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content;
    use tempfile::tempdir;

    #[test]
    fn thumbnails_follow_project_order() {
        let dir = tempdir().expect("tempdir");
        std::fs::write(dir.path().join("two.png"), b"not really a png").expect("write image");
        let file = dir.path().join("portfolio.toml");
        std::fs::write(
            &file,
            r#"
[about]
name = "T"

[[projects]]
id = 1
title = "One"
description = "d"
image = "one.png"

[[projects]]
id = 2
title = "Two"
description = "d"
image = "two.png"
"#,
        )
        .expect("write content");

        let content = content::load_from_path(&file).expect("load");
        let thumbnails = load_thumbnails(&content);
        assert_eq!(thumbnails.len(), 2);
        assert!(thumbnails[0].is_none());
        assert!(thumbnails[1].is_some());
    }

    #[test]
    fn bundled_portfolio_has_every_thumbnail() {
        let content = content::load_embedded().expect("embedded content");
        let thumbnails = load_thumbnails(&content);
        assert_eq!(thumbnails.len(), content.projects.len());
        assert!(thumbnails.iter().all(Option::is_some));
    }
}
