//! User-facing notifications.
//!
//! Fire-and-forget: a notifier never fails and never returns anything. Within
//! one operation notifications are delivered in call order.

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub severity: Severity,
    pub message: String,
}

impl Notification {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }
}

pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);

    fn info(&self, message: &str) {
        self.notify(Notification::info(message));
    }

    fn error(&self, message: &str) {
        self.notify(Notification::error(message));
    }
}

impl<N> Notifier for Arc<N>
where
    N: Notifier + ?Sized,
{
    fn notify(&self, notification: Notification) {
        (**self).notify(notification)
    }
}

/// Collects notifications in memory (tests/dev).
#[derive(Debug, Default)]
pub struct InMemoryNotifier {
    sent: Mutex<Vec<Notification>>,
}

impl InMemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything sent so far, oldest first.
    pub fn notifications(&self) -> Vec<Notification> {
        self.sent.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Everything sent so far; the log is emptied.
    pub fn take(&self) -> Vec<Notification> {
        self.sent
            .lock()
            .map(|mut s| std::mem::take(&mut *s))
            .unwrap_or_default()
    }
}

impl Notifier for InMemoryNotifier {
    fn notify(&self, notification: Notification) {
        if let Ok(mut sent) = self.sent.lock() {
            sent.push(notification);
        }
    }
}

/// Forwards notifications to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        match notification.severity {
            Severity::Info => info!(text = %notification.message, "user notification"),
            Severity::Error => warn!(text = %notification.message, "user error notification"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_memory_notifier_keeps_call_order() {
        let n = InMemoryNotifier::new();
        n.info("first");
        n.error("second");

        assert_eq!(
            n.take(),
            vec![Notification::info("first"), Notification::error("second")]
        );
        assert!(n.notifications().is_empty());
    }

    #[test]
    fn shared_notifier_records_through_arc() {
        let n = Arc::new(InMemoryNotifier::new());
        let shared: Arc<dyn Notifier> = n.clone();
        shared.error("boom");
        assert_eq!(n.notifications(), vec![Notification::error("boom")]);
    }
}
