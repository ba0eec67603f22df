use super::Notification;
use notification_contract::NotificationMessage;
use std::collections::VecDeque;

pub const NOTIFICATIONS_CAPACITY: usize = 50;

///
/// Recent notifications of the session, newest first.
///
/// Holds at most [NOTIFICATIONS_CAPACITY] entries, the oldest one
/// is evicted when a new notification arrives at full capacity.
/// Nothing is persisted, the store lives as long as the session.
///
#[derive(Debug, Default)]
pub struct NotificationStore {
    notifications: VecDeque<Notification>,
}

impl NotificationStore {
    pub fn new() -> Self {
        Self {
            notifications: VecDeque::with_capacity(NOTIFICATIONS_CAPACITY),
        }
    }

    pub fn receive(&mut self, message: NotificationMessage) -> &Notification {
        if self.notifications.len() == NOTIFICATIONS_CAPACITY {
            self.notifications.pop_back();
        }
        self.notifications.push_front(Notification::new(message));

        &self.notifications[0]
    }

    /// Called when the notification panel opens
    pub fn mark_all_read(&mut self) {
        self.notifications
            .iter_mut()
            .for_each(|notification| notification.read = true);
    }

    pub fn clear(&mut self) {
        self.notifications.clear();
    }

    pub fn notifications(&self) -> impl Iterator<Item = &Notification> {
        self.notifications.iter()
    }

    pub fn len(&self) -> usize {
        self.notifications.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    pub fn unread_count(&self) -> usize {
        self.notifications
            .iter()
            .filter(|notification| !notification.read)
            .count()
    }

    ///
    /// Badge shown next to the bell
    ///
    /// ### Returns
    /// None when everything is read, "9+" above nine unread notifications
    ///
    pub fn bell_label(&self) -> Option<String> {
        match self.unread_count() {
            0 => None,
            count if count > 9 => Some("9+".to_string()),
            count => Some(count.to_string()),
        }
    }
}
