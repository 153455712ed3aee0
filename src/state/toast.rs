//! Transient notifications ("toasts") shown in the status bar

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Severity of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
}

/// A human-readable message for transient display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
        }
    }
}

/// Receives notifications; senders never learn whether they were seen
pub trait NotificationSink {
    fn notify(&mut self, notification: Notification);
}

impl NotificationSink for Vec<Notification> {
    fn notify(&mut self, notification: Notification) {
        self.push(notification);
    }
}

#[derive(Debug, Clone)]
struct Toast {
    notification: Notification,
    shown_at: Instant,
}

/// Queue of toasts; each one expires after a fixed time or on dismissal
#[derive(Debug)]
pub struct ToastQueue {
    toasts: VecDeque<Toast>,
    ttl: Duration,
}

impl ToastQueue {
    /// How long a toast stays visible
    pub const DEFAULT_TTL: Duration = Duration::from_millis(4000);
    /// Older toasts are dropped past this many
    const MAX_VISIBLE: usize = 3;

    pub fn new(ttl: Duration) -> Self {
        Self {
            toasts: VecDeque::new(),
            ttl,
        }
    }

    /// Drop expired toasts
    pub fn prune(&mut self) {
        let ttl = self.ttl;
        self.toasts.retain(|t| t.shown_at.elapsed() < ttl);
    }

    /// Dismiss the most recent toast
    pub fn dismiss(&mut self) {
        self.toasts.pop_back();
    }

    pub fn latest(&self) -> Option<&Notification> {
        self.toasts.back().map(|t| &t.notification)
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.toasts.len()
    }
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(Self::DEFAULT_TTL)
    }
}

impl NotificationSink for ToastQueue {
    fn notify(&mut self, notification: Notification) {
        match notification.level {
            NotificationLevel::Success => tracing::info!("toast: {}", notification.message),
            NotificationLevel::Error => tracing::warn!("toast: {}", notification.message),
        }
        self.toasts.push_back(Toast {
            notification,
            shown_at: Instant::now(),
        });
        while self.toasts.len() > Self::MAX_VISIBLE {
            self.toasts.pop_front();
        }
    }
}
