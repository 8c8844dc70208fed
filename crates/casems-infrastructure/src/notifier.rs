//! Notifier implementations.

use casems_core::notification::{Notification, Notifier};
use std::sync::Mutex;

/// Notifier that reports every notification as a tracing event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        if notification.is_destructive() {
            tracing::warn!(
                title = %notification.title,
                "[Notify] {}",
                notification.description
            );
        } else {
            tracing::info!(
                title = %notification.title,
                "[Notify] {}",
                notification.description
            );
        }
    }
}

/// Notifier that keeps every notification until drained.
///
/// The command-line front end drains it after each command to print the
/// toasts; tests use it to assert on them.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notifications: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of everything recorded so far.
    pub fn snapshot(&self) -> Vec<Notification> {
        self.notifications
            .lock()
            .map(|n| n.clone())
            .unwrap_or_default()
    }

    /// Removes and returns everything recorded so far.
    pub fn drain(&self) -> Vec<Notification> {
        self.notifications
            .lock()
            .map(|mut n| std::mem::take(&mut *n))
            .unwrap_or_default()
    }

    /// Title of the most recent notification.
    pub fn last_title(&self) -> Option<String> {
        self.notifications
            .lock()
            .ok()
            .and_then(|n| n.last().map(|last| last.title.clone()))
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        tracing::debug!("[Notify] {}", notification.title);
        if let Ok(mut notifications) = self.notifications.lock() {
            notifications.push(notification);
        }
    }
}
