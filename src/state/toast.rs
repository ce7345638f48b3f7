//! Toast notifications shown at the bottom of every view

use std::time::{Duration, Instant};

/// Default time a toast stays on screen
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// A transient user-facing message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    pub display_duration: Duration,
}

impl Notification {
    pub fn success(message: impl Into<String>, display_duration: Duration) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
            display_duration,
        }
    }

    pub fn error(message: impl Into<String>, display_duration: Duration) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
            display_duration,
        }
    }
}

/// Sink for notifications. Fire and forget.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier {
    fn notify(&mut self, notification: Notification);
}

/// A notification currently on screen
#[derive(Debug, Clone)]
pub struct Toast {
    pub notification: Notification,
    pub shown_at: Instant,
}

impl Toast {
    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= self.notification.display_duration
    }
}

/// Overlay holding at most one toast; a new notification replaces the old one
#[derive(Debug, Default)]
pub struct ToastOverlay {
    current: Option<Toast>,
}

impl ToastOverlay {
    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    /// Hide the toast once its display time has passed
    pub fn tick(&mut self, now: Instant) {
        if self.current.as_ref().is_some_and(|toast| toast.is_expired(now)) {
            self.current = None;
        }
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }
}

impl Notifier for ToastOverlay {
    fn notify(&mut self, notification: Notification) {
        match notification.kind {
            NotificationKind::Success => tracing::info!(message = %notification.message, "toast"),
            NotificationKind::Error => tracing::debug!(message = %notification.message, "error toast"),
        }
        self.current = Some(Toast {
            notification,
            shown_at: Instant::now(),
        });
    }
}
