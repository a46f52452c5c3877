//! # One-Shot Timers
//!
//! Simulated latency. A timer sleeps on the tokio runtime, resolves its
//! action, and sends it back to the event loop over the same channel the
//! loop drains every frame.
//!
//! Each timer returns a `PendingTimer`, which is the cancel handle. Dropping
//! the handle does NOT cancel; only `cancel()` does.

use std::future::Future;
use std::sync::mpsc;
use std::time::Duration;

use log::{debug, warn};
use tokio::task::JoinHandle;

use crate::core::action::Action;

pub struct PendingTimer {
    label: &'static str,
    handle: JoinHandle<()>,
}

impl PendingTimer {
    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    pub fn cancel(&self) {
        if !self.handle.is_finished() {
            debug!("Cancelling {} timer", self.label);
        }
        self.handle.abort();
    }

    /// Wait for the timer to fire (or be cancelled).
    pub async fn join(self) {
        let _ = self.handle.await;
    }
}

/// Send `action` after `delay`.
pub fn schedule(
    label: &'static str,
    delay: Duration,
    action: Action,
    tx: mpsc::Sender<Action>,
) -> PendingTimer {
    schedule_with(label, delay, async move { action }, tx)
}

/// Sleep for `delay`, then await `make_action` and send its output.
/// The action future is only polled after the delay has elapsed.
pub fn schedule_with<F>(
    label: &'static str,
    delay: Duration,
    make_action: F,
    tx: mpsc::Sender<Action>,
) -> PendingTimer
where
    F: Future<Output = Action> + Send + 'static,
{
    debug!("Scheduling {} timer ({}ms)", label, delay.as_millis());
    let handle = tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        let action = make_action.await;
        if tx.send(action).is_err() {
            warn!("Failed to deliver {} timer action: receiver dropped", label);
        }
    });
    PendingTimer { label, handle }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::navigation::Tab;

    #[tokio::test(start_paused = true)]
    async fn fires_after_delay() {
        let (tx, rx) = mpsc::channel();
        let start = tokio::time::Instant::now();
        let timer = schedule("test", Duration::from_secs(2), Action::SelectTab(Tab::Chat), tx);
        assert_eq!(timer.label(), "test");
        assert!(rx.try_recv().is_err());

        timer.join().await;

        assert!(start.elapsed() >= Duration::from_secs(2));
        assert_eq!(rx.try_recv().ok(), Some(Action::SelectTab(Tab::Chat)));
    }

    #[tokio::test(start_paused = true)]
    async fn nothing_arrives_before_delay() {
        let (tx, rx) = mpsc::channel();
        let _timer = schedule("test", Duration::from_secs(2), Action::Quit, tx);

        tokio::time::sleep(Duration::from_millis(1999)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_timer_never_sends() {
        let (tx, rx) = mpsc::channel();
        let timer = schedule("test", Duration::from_secs(2), Action::Quit, tx);
        timer.cancel();
        timer.join().await;

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn dropped_receiver_is_not_fatal() {
        let (tx, rx) = mpsc::channel();
        drop(rx);
        let timer = schedule("test", Duration::from_millis(10), Action::Quit, tx);
        timer.join().await;
    }
}
