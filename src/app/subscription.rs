// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard shortcuts drive the gallery; events already captured by a widget
//! are left alone.

use super::Message;
use crate::ui::gallery;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, time, Subscription};
use std::time::Duration;

/// Gallery action bound to a key, if any.
pub(super) fn gallery_shortcut(key: &Key) -> Option<gallery::Message> {
    match key {
        Key::Named(Named::ArrowLeft) => Some(gallery::Message::SelectPrevious),
        Key::Named(Named::ArrowRight) => Some(gallery::Message::SelectNext),
        Key::Named(Named::Escape) => Some(gallery::Message::CloseModal),
        Key::Named(Named::Enter | Named::Space) => Some(gallery::Message::OpenCurrent),
        _ => None,
    }
}

pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| {
        if matches!(status, event::Status::Captured) {
            return None;
        }
        match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
                gallery_shortcut(&key).map(Message::Gallery)
            }
            _ => None,
        }
    })
}

/// Ticks only while there are notifications to expire.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_navigate() {
        assert_eq!(
            gallery_shortcut(&Key::Named(Named::ArrowLeft)),
            Some(gallery::Message::SelectPrevious)
        );
        assert_eq!(
            gallery_shortcut(&Key::Named(Named::ArrowRight)),
            Some(gallery::Message::SelectNext)
        );
    }

    #[test]
    fn escape_closes_and_enter_opens() {
        assert_eq!(
            gallery_shortcut(&Key::Named(Named::Escape)),
            Some(gallery::Message::CloseModal)
        );
        assert_eq!(
            gallery_shortcut(&Key::Named(Named::Enter)),
            Some(gallery::Message::OpenCurrent)
        );
        assert_eq!(
            gallery_shortcut(&Key::Named(Named::Space)),
            Some(gallery::Message::OpenCurrent)
        );
    }

    #[test]
    fn other_keys_are_ignored() {
        assert_eq!(gallery_shortcut(&Key::Character("a".into())), None);
        assert_eq!(gallery_shortcut(&Key::Named(Named::Tab)), None);
    }
}
