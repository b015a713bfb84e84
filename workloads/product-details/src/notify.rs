//! Shopper-facing notifications.

use std::cell::RefCell;

/// Fire-and-forget surface for transient error messages.
pub trait Notifier {
    /// Show an error. `None` shows an empty toast, as when the server
    /// gave no message.
    fn notify_error(&self, message: Option<&str>);
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn notify_error(&self, message: Option<&str>) {
        (**self).notify_error(message)
    }
}

/// A queued error toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: Option<String>,
}

/// Collects toasts in memory until the caller displays them.
#[derive(Debug, Default)]
pub struct ToastQueue {
    toasts: RefCell<Vec<Toast>>,
}

impl ToastQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of queued toasts.
    pub fn len(&self) -> usize {
        self.toasts.borrow().len()
    }

    /// Check if nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.toasts.borrow().is_empty()
    }

    /// Copy of the queued toasts.
    pub fn snapshot(&self) -> Vec<Toast> {
        self.toasts.borrow().clone()
    }

    /// Take all queued toasts.
    pub fn drain(&self) -> Vec<Toast> {
        std::mem::take(&mut *self.toasts.borrow_mut())
    }
}

impl Notifier for ToastQueue {
    fn notify_error(&self, message: Option<&str>) {
        self.toasts.borrow_mut().push(Toast {
            message: message.map(str::to_string),
        });
    }
}

/// Emits notifications as `tracing` error events.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify_error(&self, message: Option<&str>) {
        tracing::error!(toast = message.unwrap_or(""), "shopper notified");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_collects_and_drains() {
        let queue = ToastQueue::new();
        queue.notify_error(Some("Out of stock"));
        queue.notify_error(None);

        assert_eq!(queue.len(), 2);
        assert_eq!(queue.snapshot()[0].message.as_deref(), Some("Out of stock"));

        let drained = queue.drain();
        assert_eq!(drained[1], Toast { message: None });
        assert!(queue.is_empty());
    }

    #[test]
    fn test_notifier_through_reference() {
        fn send(notifier: impl Notifier) {
            notifier.notify_error(Some("x"));
        }

        let queue = ToastQueue::new();
        send(&queue);
        assert_eq!(queue.len(), 1);
    }
}
