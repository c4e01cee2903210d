//! Cancellable one-shot timer.

use std::time::Duration;

use tokio::task::JoinHandle;

/// Runs an action once a quiet period has passed since it was last armed.
///
/// At most one action is pending. Re-arming cancels the previous one, and so
/// does dropping the timer. Cancellation only reaches actions that have not
/// fired yet: whatever the action spawns keeps running.
pub struct DebounceTimer {
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl DebounceTimer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedule `action` after the delay, replacing any pending one.
    ///
    /// Must be called from within a tokio runtime.
    pub fn arm<F>(&mut self, action: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.cancel();
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            action();
        }));
    }

    /// Drop the pending action. Returns `true` if one had not fired yet.
    pub fn cancel(&mut self) -> bool {
        match self.pending.take() {
            Some(handle) if !handle.is_finished() => {
                handle.abort();
                true
            }
            _ => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for DebounceTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
