//! User-facing notifications.
//!
//! The wizard reports rejected steps and finished print jobs as a message
//! plus a severity. Displaying them (toast, status line, log) is up to the
//! collaborator behind [`Notifier`].

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
}

impl Notification {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Error,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Success,
        }
    }
}

/// Receives notifications from the wizard.
pub trait Notifier {
    fn notify(&self, notification: Notification);
}

impl<N: Notifier + ?Sized> Notifier for Box<N> {
    fn notify(&self, notification: Notification) {
        (**self).notify(notification)
    }
}

impl<N: Notifier + ?Sized> Notifier for Arc<N> {
    fn notify(&self, notification: Notification) {
        (**self).notify(notification)
    }
}

/// Emits notifications as log events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        match notification.severity {
            Severity::Error => tracing::warn!(message = %notification.message, "notification"),
            Severity::Success => tracing::info!(message = %notification.message, "notification"),
        }
    }
}

/// Keeps every notification in memory.
///
/// Clones share the same buffer, so one handle can go to the wizard while
/// another reads what was reported.
#[derive(Debug, Default, Clone)]
pub struct RecordingNotifier {
    inner: Arc<Mutex<Vec<Notification>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// A panic elsewhere while holding the lock must not lose what was
    /// already recorded.
    fn buffer(&self) -> MutexGuard<'_, Vec<Notification>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Everything received so far, oldest first.
    pub fn notifications(&self) -> Vec<Notification> {
        self.buffer().clone()
    }

    pub fn last(&self) -> Option<Notification> {
        self.buffer().last().cloned()
    }

    /// Remove and return everything received so far.
    pub fn drain(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.buffer())
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.buffer().push(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_handles_share_a_buffer() {
        let recorder = RecordingNotifier::new();
        let handle = recorder.clone();

        recorder.notify(Notification::error("Please enter client name"));
        recorder.notify(Notification::success("done"));

        assert_eq!(handle.notifications().len(), 2);
        assert_eq!(handle.last(), Some(Notification::success("done")));
        assert_eq!(handle.drain().len(), 2);
        assert!(recorder.notifications().is_empty());
    }

    #[test]
    fn boxed_notifier_forwards() {
        let recorder = RecordingNotifier::new();
        let boxed: Box<dyn Notifier> = Box::new(recorder.clone());
        boxed.notify(Notification::error("x"));
        assert_eq!(recorder.last().unwrap().severity, Severity::Error);
    }

    #[test]
    fn poisoned_buffer_keeps_recording() {
        let recorder = RecordingNotifier::new();
        recorder.notify(Notification::error("before"));

        let inner = Arc::clone(&recorder.inner);
        let crashed = std::thread::spawn(move || {
            let _guard = inner.lock().unwrap();
            panic!("reader crashed while holding the buffer");
        })
        .join();
        assert!(crashed.is_err());
        assert!(recorder.inner.is_poisoned());

        recorder.notify(Notification::success("after"));

        assert_eq!(
            recorder.notifications(),
            vec![Notification::error("before"), Notification::success("after")]
        );
        assert_eq!(recorder.drain().len(), 2);
    }
}
