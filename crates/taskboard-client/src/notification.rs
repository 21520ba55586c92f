use parking_lot::Mutex;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationVariant {
    Error,
    Success,
}

/// Transient message shown after an interaction, e.g. a failed mutation.
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub variant: NotificationVariant,
    pub created_at: Instant,
}

impl Notification {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            variant: NotificationVariant::Error,
            created_at: Instant::now(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            variant: NotificationVariant::Success,
            created_at: Instant::now(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.variant == NotificationVariant::Error
    }

    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.created_at.elapsed() > ttl
    }
}

#[derive(Debug, Default)]
pub struct NotificationCenter {
    queue: Mutex<Vec<Notification>>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, notification: Notification) {
        self.queue.lock().push(notification);
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(Notification::success(message));
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(Notification::error(message));
    }

    /// Drops expired notifications and returns the rest, oldest first.
    pub fn active(&self, ttl: Duration) -> Vec<Notification> {
        let mut queue = self.queue.lock();
        queue.retain(|n| !n.is_expired(ttl));
        queue.clone()
    }

    pub fn latest(&self) -> Option<Notification> {
        self.queue.lock().last().cloned()
    }

    pub fn drain(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.queue.lock())
    }

    pub fn is_empty(&self) -> bool {
        self.queue.lock().is_empty()
    }
}
