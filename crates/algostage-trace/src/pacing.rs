//! Pacing and cancellation for run tasks.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tokio::sync::Notify;

/// A run was cancelled at a suspension point.
///
/// Control flow, not a failure: routines bail out with `?` and the run
/// task discards the outcome.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("run cancelled at a suspension point")]
pub struct Cancelled;

/// Shared pacing controls handed to a run task.
///
/// The delay cell is shared with the controller, so delay changes apply at
/// the next suspension point and never retroactively. The cancellation
/// token is per-run: tripping it wakes an in-flight sleep and makes every
/// later `suspend` return `Err(Cancelled)`. The flag is never cleared, so
/// a stale task cannot be resurrected by a successor run.
#[derive(Debug, Clone)]
pub struct Pacer {
    delay_ms: Arc<AtomicU64>,
    cancelled: Arc<AtomicBool>,
    cancel_notify: Arc<Notify>,
}

impl Pacer {
    /// Create a pacer reading its delay from the given shared cell.
    pub fn new(delay_ms: Arc<AtomicU64>) -> Self {
        Self {
            delay_ms,
            cancelled: Arc::new(AtomicBool::new(false)),
            cancel_notify: Arc::new(Notify::new()),
        }
    }

    /// Current inter-step delay in milliseconds.
    pub fn delay_ms(&self) -> u64 {
        self.delay_ms.load(Ordering::SeqCst)
    }

    /// Trip the cancellation token and wake any in-flight sleep.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
        self.cancel_notify.notify_waiters();
    }

    /// Whether the token has been tripped.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Suspend between steps for the current delay.
    ///
    /// A zero delay still yields to the scheduler so cancellation gets a
    /// chance to land between steps. Returns `Err(Cancelled)` when the
    /// token tripped before or during the wait.
    pub async fn suspend(&self) -> Result<(), Cancelled> {
        if self.is_cancelled() {
            return Err(Cancelled);
        }

        let delay = self.delay_ms();
        if delay == 0 {
            tokio::task::yield_now().await;
        } else {
            // Register for wakeups before re-checking the flag: a cancel
            // landing between the check and the select is then guaranteed
            // to either be seen here or wake the notified future.
            let notified = self.cancel_notify.notified();
            if self.is_cancelled() {
                return Err(Cancelled);
            }
            tokio::select! {
                _ = tokio::time::sleep(Duration::from_millis(delay)) => {}
                _ = notified => {}
            }
        }

        if self.is_cancelled() {
            return Err(Cancelled);
        }
        Ok(())
    }
}
