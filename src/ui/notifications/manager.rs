// SPDX-License-Identifier: MPL-2.0
//! Notification queue with a cap on simultaneously visible toasts.

use super::notification::{Notification, NotificationId, Severity};
use std::collections::VecDeque;

/// Maximum number of notifications visible at once.
const MAX_VISIBLE: usize = 3;

#[derive(Debug, Clone)]
pub enum Message {
    Dismiss(NotificationId),
}

#[derive(Debug, Default)]
pub struct Manager {
    /// Newest first.
    visible: VecDeque<Notification>,
    queue: VecDeque<Notification>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows the notification immediately when there is room, otherwise
    /// queues it until a visible one goes away.
    pub fn push(&mut self, notification: Notification) {
        match notification.severity() {
            Severity::Warning => {
                tracing::warn!(key = notification.message_key(), "notification");
            }
            Severity::Error => {
                tracing::error!(key = notification.message_key(), "notification");
            }
            Severity::Success | Severity::Info => {
                tracing::debug!(key = notification.message_key(), "notification");
            }
        }

        if self.visible.len() < MAX_VISIBLE {
            self.visible.push_front(notification);
        } else {
            self.queue.push_back(notification);
        }
    }

    /// Returns `true` if the notification was found and removed.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if let Some(pos) = self.visible.iter().position(|n| n.id() == id) {
            self.visible.remove(pos);
            self.promote_from_queue();
            return true;
        }

        if let Some(pos) = self.queue.iter().position(|n| n.id() == id) {
            self.queue.remove(pos);
            return true;
        }

        false
    }

    /// Dismisses every visible notification whose timer has run out.
    pub fn tick(&mut self) {
        let expired: Vec<NotificationId> = self
            .visible
            .iter()
            .filter(|n| n.should_auto_dismiss())
            .map(Notification::id)
            .collect();

        for id in expired {
            self.dismiss(id);
        }
    }

    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
        }
    }

    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty() || !self.queue.is_empty()
    }

    /// Queued notifications are newer than every visible one, so they enter
    /// at the front.
    fn promote_from_queue(&mut self) {
        while self.visible.len() < MAX_VISIBLE {
            let Some(notification) = self.queue.pop_front() else {
                break;
            };
            self.visible.push_front(notification);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::new();
        assert_eq!(manager.visible_count(), 0);
        assert_eq!(manager.queued_count(), 0);
        assert!(!manager.has_notifications());
    }

    #[test]
    fn overflow_is_queued() {
        let mut manager = Manager::new();
        for _ in 0..5 {
            manager.push(Notification::info("notification-link-copied"));
        }
        assert_eq!(manager.visible_count(), MAX_VISIBLE);
        assert_eq!(manager.queued_count(), 2);
    }

    #[test]
    fn dismiss_promotes_from_queue() {
        let mut manager = Manager::new();
        for _ in 0..4 {
            manager.push(Notification::error("error-io"));
        }
        let first = manager.visible().next().map(Notification::id).expect("visible");

        assert!(manager.dismiss(first));
        assert_eq!(manager.visible_count(), MAX_VISIBLE);
        assert_eq!(manager.queued_count(), 0);
    }

    #[test]
    fn promoted_notification_is_shown_first() {
        let mut manager = Manager::new();
        let pushed: Vec<NotificationId> = (0..4)
            .map(|_| {
                let notification = Notification::info("notification-link-copied");
                let id = notification.id();
                manager.push(notification);
                id
            })
            .collect();

        assert!(manager.dismiss(pushed[1]));
        let order: Vec<NotificationId> = manager.visible().map(Notification::id).collect();
        assert_eq!(order, vec![pushed[3], pushed[2], pushed[0]]);
    }

    #[test]
    fn dismiss_message_removes_notification() {
        let mut manager = Manager::new();
        let notification = Notification::info("notification-link-copied");
        let id = notification.id();
        manager.push(notification);

        manager.handle_message(&Message::Dismiss(id));
        assert!(!manager.has_notifications());
    }

    #[test]
    fn dismiss_unknown_id_returns_false() {
        let mut manager = Manager::new();
        let stray = Notification::info("x");
        assert!(!manager.dismiss(stray.id()));
    }

    #[test]
    fn tick_keeps_fresh_notifications() {
        let mut manager = Manager::new();
        manager.push(Notification::success("notification-link-copied"));
        manager.tick();
        assert_eq!(manager.visible_count(), 1);
    }
}
