//! Shutdown coordination.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use tokio::sync::Notify;

/// Why the process is shutting down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownReason {
    /// Interrupt signal (Ctrl-C / SIGINT).
    Interrupt,
    /// Terminate signal (SIGTERM).
    Terminate,
    /// A component hit a fatal error.
    ComponentFailure,
}

/// Coordinator for graceful shutdown.
///
/// A process-wide broadcast signal with two trigger sources: OS signals and
/// component fatal errors. The first trigger wins and the signal is permanent;
/// tasks that start waiting after the trigger still observe it immediately.
#[derive(Debug, Clone)]
pub struct Shutdown {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    notify: Notify,
    fired: AtomicBool,
    reason: Mutex<Option<ShutdownReason>>,
}

impl Shutdown {
    /// Create a new shutdown coordinator.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Inner {
                notify: Notify::new(),
                fired: AtomicBool::new(false),
                reason: Mutex::new(None),
            }),
        }
    }

    /// Trigger the shutdown signal. Only the first trigger takes effect.
    pub fn trigger(&self, reason: ShutdownReason) {
        // Store the reason before flipping the flag so that a waiter woken by
        // the flag always finds the reason set.
        {
            let mut slot = self.inner.reason.lock().unwrap_or_else(|e| e.into_inner());
            if slot.is_some() {
                tracing::debug!(reason = ?reason, "duplicate shutdown trigger ignored");
                return;
            }
            *slot = Some(reason);
        }

        self.inner.fired.store(true, Ordering::SeqCst);
        self.inner.notify.notify_waiters();
        tracing::info!(reason = ?reason, "shutdown triggered");
    }

    /// Whether the shutdown signal has fired.
    pub fn is_cancelled(&self) -> bool {
        self.inner.fired.load(Ordering::SeqCst)
    }

    /// The reason the signal fired, if it has.
    pub fn reason(&self) -> Option<ShutdownReason> {
        *self.inner.reason.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Wait until the shutdown signal fires. Returns immediately if it
    /// already has.
    pub async fn cancelled(&self) {
        let mut notified = std::pin::pin!(self.inner.notify.notified());
        if self.is_cancelled() {
            return;
        }
        // Register interest before re-checking the flag, otherwise a trigger
        // landing between the check and the await would be lost.
        notified.as_mut().enable();
        if self.is_cancelled() {
            return;
        }
        notified.await;
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}
