// SPDX-License-Identifier: MPL-2.0
//! Gallery component: message handling and rendering entry points for the
//! project views section.

use super::{empty_state, modal, pane};
use crate::config::GalleryConfig;
use crate::content::Content;
use crate::error::Error;
use crate::gallery::GalleryController;
use crate::i18n::fluent::I18n;
use crate::ui::images;
use crate::ui::theming::ColorScheme;
use iced::widget::image::Handle;
use iced::Element;

/// Messages emitted by the gallery views, one per controller operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    SelectPrevious,
    SelectNext,
    GoToIndex(usize),
    OpenModal(String),
    /// Open the viewer on whatever item is current (keyboard shortcut).
    OpenCurrent,
    CloseModal,
    /// Click on the viewer backdrop; closes unless disabled in settings.
    BackdropPressed,
}

/// Environment passed down from the application when rendering.
pub struct ViewEnv<'a> {
    pub i18n: &'a I18n,
    pub colors: &'a ColorScheme,
    pub show_indicators: bool,
}

/// Decoded image source for one gallery item.
#[derive(Debug, Clone)]
pub struct Slide {
    /// Where the image was looked up, shown when it is missing.
    pub source: String,
    /// `None` when the image is neither bundled nor on disk.
    pub handle: Option<Handle>,
}

/// Gallery state: a live controller, or the degraded display used when the
/// portfolio lists no project views.
#[derive(Debug)]
pub enum State {
    Ready {
        controller: GalleryController,
        slides: Vec<Slide>,
    },
    Empty,
}

impl State {
    pub fn new(content: &Content) -> Self {
        match GalleryController::new(content.gallery_items()) {
            Ok(controller) => {
                let slides = controller
                    .items()
                    .iter()
                    .map(|item| {
                        let resource = content.resource(&item.image_ref);
                        Slide {
                            source: resource.label(),
                            handle: images::handle(&resource),
                        }
                    })
                    .collect();
                tracing::info!(items = controller.len(), "gallery ready");
                State::Ready { controller, slides }
            }
            Err(Error::EmptyGallery) => {
                tracing::warn!("portfolio has no project views, gallery disabled");
                State::Empty
            }
            Err(err) => {
                tracing::error!(error = %err, "gallery could not be created");
                State::Empty
            }
        }
    }

    pub fn controller(&self) -> Option<&GalleryController> {
        match self {
            State::Ready { controller, .. } => Some(controller),
            State::Empty => None,
        }
    }

    pub fn is_modal_open(&self) -> bool {
        self.controller().is_some_and(GalleryController::modal_open)
    }

    /// Applies a message to the controller. Messages are ignored while the
    /// gallery is empty.
    pub fn update(&mut self, message: Message, config: &GalleryConfig) {
        let State::Ready { controller, .. } = self else {
            tracing::debug!(?message, "gallery empty, ignoring message");
            return;
        };

        match message {
            Message::SelectPrevious => controller.select_previous(),
            Message::SelectNext => controller.select_next(),
            Message::GoToIndex(index) => controller.go_to_index(index),
            Message::OpenModal(image_ref) => controller.open_modal(&image_ref),
            Message::OpenCurrent => controller.open_current(),
            Message::CloseModal => controller.close_modal(),
            Message::BackdropPressed => {
                if config.close_modal_on_backdrop() {
                    controller.close_modal();
                }
            }
        }
    }

    /// Renders the inline gallery (main image, arrows, caption, indicators).
    pub fn view<'a>(&'a self, env: ViewEnv<'a>) -> Element<'a, Message> {
        match self {
            State::Ready { controller, slides } => pane::view(&env, controller, slides),
            State::Empty => empty_state::view(env.i18n, env.colors),
        }
    }

    /// Renders the full-window image viewer, or `None` while it is closed.
    pub fn modal_view<'a>(&'a self, env: ViewEnv<'a>) -> Option<Element<'a, Message>> {
        let State::Ready { controller, slides } = self else {
            return None;
        };
        let image_ref = controller.modal_image_ref()?;
        let slide = controller
            .items()
            .iter()
            .position(|item| item.image_ref == image_ref)
            .and_then(|index| slides.get(index))?;
        Some(modal::view(&env, slide))
    }
}
