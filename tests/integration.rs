// SPDX-License-Identifier: MPL-2.0
use iced_folio::config::{self, Config, GalleryConfig, GeneralConfig};
use iced_folio::content;
use iced_folio::error::Error;
use iced_folio::gallery::{GalleryController, GalleryItem};
use iced_folio::i18n::fluent::I18n;
use iced_folio::ui::theming::ThemeMode;
use tempfile::tempdir;

fn five_items() -> Vec<GalleryItem> {
    ["Bamguate", "LocalHotel", "Blog", "Calculator", "Market"]
        .iter()
        .zip(1u32..)
        .map(|(title, id)| {
            GalleryItem::new(id, *title, format!("{title} description"), format!("img{id}.jpg"))
        })
        .collect()
}

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    let english = Config {
        general: GeneralConfig {
            language: Some("en-US".to_string()),
            theme_mode: ThemeMode::Dark,
        },
        gallery: GalleryConfig::default(),
    };
    config::save_to_path(&english, &config_path).expect("Failed to write initial config file");
    let loaded = config::load_from_path(&config_path).expect("Failed to load initial config");
    let i18n_en = I18n::new(None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");
    assert_eq!(i18n_en.tr("section-projects-title"), "Projects");

    let spanish = Config {
        general: GeneralConfig {
            language: Some("es".to_string()),
            ..english.general.clone()
        },
        ..english.clone()
    };
    config::save_to_path(&spanish, &config_path).expect("Failed to write spanish config file");
    let loaded = config::load_from_path(&config_path).expect("Failed to load spanish config");
    let i18n_es = I18n::new(None, &loaded);
    assert_eq!(i18n_es.current_locale().to_string(), "es");
    assert_eq!(i18n_es.tr("section-projects-title"), "Proyectos");
}

#[test]
fn test_cli_language_beats_config() {
    let config = Config {
        general: GeneralConfig {
            language: Some("es".to_string()),
            ..GeneralConfig::default()
        },
        ..Config::default()
    };
    let i18n = I18n::new(Some("en-US".to_string()), &config);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
}

#[test]
fn test_gallery_settings_round_trip_through_file() {
    let dir = tempdir().expect("tempdir");
    let config = Config {
        gallery: GalleryConfig {
            show_indicators: Some(false),
            close_modal_on_backdrop: Some(false),
        },
        ..Config::default()
    };
    config::save_with_override(&config, Some(dir.path().to_path_buf())).expect("save");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert!(!loaded.gallery.show_indicators());
    assert!(!loaded.gallery.close_modal_on_backdrop());
}

#[test]
fn test_browse_and_view_scenario() {
    let mut gallery = GalleryController::new(five_items()).expect("non-empty gallery");

    gallery.select_next();
    gallery.select_next();
    assert_eq!(gallery.current_index(), 2);

    gallery.open_modal("img3.jpg");
    assert!(gallery.modal_open());
    assert_eq!(gallery.modal_image_ref(), Some("img3.jpg"));

    gallery.close_modal();
    assert!(!gallery.modal_open());
    assert_eq!(gallery.modal_image_ref(), None);
    assert_eq!(gallery.current_index(), 2);
}

#[test]
fn test_wraparound_both_directions() {
    let mut gallery = GalleryController::new(five_items()).expect("non-empty gallery");

    gallery.select_previous();
    assert_eq!(gallery.current_index(), 4);
    gallery.select_next();
    assert_eq!(gallery.current_index(), 0);

    for _ in 0..gallery.len() {
        gallery.select_next();
    }
    assert_eq!(gallery.current_index(), 0);
}

#[test]
fn test_empty_gallery_is_rejected() {
    let result = GalleryController::new(Vec::new());
    assert!(matches!(result, Err(Error::EmptyGallery)));
}

#[test]
fn test_bundled_portfolio_feeds_gallery() {
    let portfolio = content::load_embedded().expect("bundled portfolio parses");
    let gallery = GalleryController::new(portfolio.gallery_items()).expect("bundled gallery");

    assert_eq!(gallery.len(), 5);
    assert_eq!(gallery.current_item().title, "Bamguate");
    assert!(!portfolio.about.name.is_empty());
    assert!(portfolio
        .skill_categories
        .iter()
        .flat_map(|category| &category.skills)
        .all(|skill| skill.level() <= content::MAX_SKILL_LEVEL));
}

#[test]
fn test_custom_portfolio_resolves_images_next_to_file() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("portfolio.toml");
    std::fs::write(
        &path,
        r#"
[about]
name = "Someone"

[[project_views]]
id = 7
title = "Only"
description = "single view"
image = "shots/only.png"
"#,
    )
    .expect("write portfolio");

    let portfolio = content::load_from_path(&path).expect("custom portfolio");
    let items = portfolio.gallery_items();
    assert_eq!(
        portfolio.resolve_path(&items[0].image_ref),
        dir.path().join("shots/only.png")
    );

    let mut gallery = GalleryController::new(items).expect("single-item gallery");
    gallery.select_next();
    assert_eq!(gallery.current_index(), 0);
    gallery.select_previous();
    assert_eq!(gallery.current_index(), 0);
}
