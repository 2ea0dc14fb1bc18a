//! # Timed failing source.
//!
//! [`TimedFailure`] schedules a single [`CancellableTimer`] per subscription.
//! When the delay elapses it delivers `Error(reason)`; no values are ever
//! emitted.
//!
//! ## Flow
//! ```text
//! subscribe ─► CancellableTimer::schedule(subscription token, delay)
//!                 ├─ delay elapses ─► subscriber.error(reason) ─► subscription closed
//!                 └─ cancelled     ─► timer task exits, nothing delivered
//! ```
//!
//! ## Example
//! ```rust
//! use std::time::Duration;
//! use rxrecover::{Config, TimedFailure};
//!
//! let src: TimedFailure<String> = TimedFailure::with_defaults(&Config::default());
//! assert_eq!(src.delay(), Duration::from_secs(3));
//! assert!(src.reason().is_timeout());
//! ```

use std::fmt;
use std::marker::PhantomData;
use std::time::Duration;

use tracing::debug;

use crate::config::Config;
use crate::error::StreamError;
use crate::producers::Producer;
use crate::subscription::{CancellableTimer, Subscriber};

/// Producer that fails once after a fixed delay.
///
/// Each subscription spawns its timer on the current tokio runtime, so
/// subscribing outside of a runtime panics.
pub struct TimedFailure<T> {
    delay: Duration,
    reason: StreamError,
    _marker: PhantomData<fn() -> T>,
}

impl<T> TimedFailure<T> {
    /// Creates a source failing with `reason` after `delay`.
    pub fn new(delay: Duration, reason: StreamError) -> Self {
        Self {
            delay,
            reason,
            _marker: PhantomData,
        }
    }

    /// Creates a source failing with [`StreamError::Timeout`] after `delay`.
    pub fn timeout(delay: Duration) -> Self {
        Self::new(delay, StreamError::Timeout { after: delay })
    }

    /// Creates a source inheriting delay and reason from `cfg`.
    pub fn with_defaults(cfg: &Config) -> Self {
        Self::new(cfg.delay, cfg.failure())
    }

    /// Delay before the error is delivered.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Error delivered when the delay elapses.
    pub fn reason(&self) -> &StreamError {
        &self.reason
    }
}

impl<T> Clone for TimedFailure<T> {
    fn clone(&self) -> Self {
        Self::new(self.delay, self.reason.clone())
    }
}

impl<T> fmt::Debug for TimedFailure<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimedFailure")
            .field("delay", &self.delay)
            .field("reason", &self.reason)
            .finish()
    }
}

impl<T: 'static> Producer<T> for TimedFailure<T> {
    fn name(&self) -> &str {
        "timed_failure"
    }

    fn subscribe_with(&self, subscriber: Subscriber<T>) {
        debug!(delay = ?self.delay, reason = self.reason.as_label(), "failure scheduled");

        let reason = self.reason.clone();
        let sink = subscriber.clone();
        CancellableTimer::schedule(subscriber.token(), self.delay, move || {
            sink.error(reason);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::Notification;
    use crate::observers::Recorder;
    use std::sync::Arc;
    use tokio::time;

    #[tokio::test(start_paused = true)]
    async fn fails_after_delay() {
        let rec = Arc::new(Recorder::<u32>::new());
        let src = TimedFailure::<u32>::timeout(Duration::from_secs(3));
        let sub = src.subscribe(rec.clone());

        time::sleep(Duration::from_millis(2999)).await;
        assert!(rec.is_empty());

        sub.closed().await;
        assert_eq!(
            rec.notifications(),
            vec![Notification::Error(StreamError::Timeout {
                after: Duration::from_secs(3)
            })]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_before_delay_delivers_nothing() {
        let rec = Arc::new(Recorder::<u32>::new());
        let src = TimedFailure::<u32>::timeout(Duration::from_secs(3));
        let sub = src.subscribe(rec.clone());

        sub.cancel();
        sub.cancel();
        time::sleep(Duration::from_secs(10)).await;

        assert!(rec.is_empty());
    }

    #[test]
    #[should_panic(expected = "runtime")]
    fn subscribe_requires_a_runtime() {
        let src = TimedFailure::<u32>::timeout(Duration::from_secs(3));
        src.subscribe(Arc::new(Recorder::<u32>::new()));
    }

    #[tokio::test(start_paused = true)]
    async fn subscriptions_are_independent() {
        let a = Arc::new(Recorder::<u32>::new());
        let b = Arc::new(Recorder::<u32>::new());
        let src = TimedFailure::<u32>::new(Duration::from_secs(1), StreamError::fail("boom"));

        let sa = src.subscribe(a.clone());
        let sb = src.subscribe(b.clone());
        sa.cancel();
        sb.closed().await;

        assert!(a.is_empty());
        assert_eq!(b.errors(), vec![StreamError::fail("boom")]);
    }
}
