//! # Cancellable one-shot timer.
//!
//! [`CancellableTimer`] runs a single deferred action on the tokio runtime
//! after a delay, unless its token is cancelled first.
//!
//! The timer token is a **child** of the token passed to
//! [`CancellableTimer::schedule`] (normally the subscription token), so
//! cancelling the subscription cancels the timer. There is no global timer
//! registry.
//!
//! ## Rules
//! - The action runs **at most once**.
//! - Cancellation wins ties: if the token is cancelled when the delay elapses,
//!   the action is skipped.
//! - The timer task exits on fire or cancel; nothing is left behind.
//! - Must be scheduled from within a tokio runtime: [`CancellableTimer::schedule`]
//!   spawns a task and panics otherwise.

use std::time::Duration;

use tokio::{select, task::JoinHandle, time};
use tokio_util::sync::CancellationToken;
use tracing::trace;

/// Deferred action tied to a cancellation token.
#[derive(Debug)]
pub struct CancellableTimer {
    token: CancellationToken,
    handle: JoinHandle<()>,
}

impl CancellableTimer {
    /// Schedules `action` to run after `delay`, unless `parent` (or this timer) is cancelled.
    ///
    /// # Panics
    /// Panics when called outside of a tokio runtime.
    pub fn schedule<F>(parent: &CancellationToken, delay: Duration, action: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        let token = parent.child_token();
        let t = token.clone();

        let handle = tokio::spawn(async move {
            let sleep = time::sleep(delay);
            tokio::pin!(sleep);

            select! {
                biased;
                _ = t.cancelled() => {
                    trace!(?delay, "timer cancelled");
                }
                _ = &mut sleep => {
                    trace!(?delay, "timer fired");
                    action();
                }
            }
        });

        Self { token, handle }
    }

    /// Cancels the pending action. Idempotent.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// True if the action can no longer run (fired or cancelled).
    pub fn is_finished(&self) -> bool {
        self.token.is_cancelled() || self.handle.is_finished()
    }
}
