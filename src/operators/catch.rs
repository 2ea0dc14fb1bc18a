//! # CatchError: substitute a fallback producer when the upstream fails.
//!
//! Values and completion pass through unchanged. An upstream error is **not**
//! forwarded; instead the [`Recovery`] strategy resolves a fallback producer,
//! which is subscribed with the output subscriber. Everything the fallback
//! delivers (values, and its own error or completion) becomes the output.
//!
//! ## State machine
//! ```text
//! Idle ──subscribe──► Upstream ──Value──► Upstream (forwarded)
//!                        │
//!                        ├──Complete──► Terminated (forwarded)
//!                        └──Error(r)──► Fallback
//!                                         ├─ fallback_for(r) = Ok(p)  ─► p.subscribe_with(output)
//!                                         └─ fallback_for(r) = Err(e) ─► Terminated, output.error(e)
//! ```
//! `Fallback` is final for the relay: the fallback delivers straight into the
//! output [`Subscriber`], which closes on the fallback's terminal notification.
//! Anything the upstream sends after that is ignored.
//!
//! ## Cancellation
//! ```text
//! output token ──child──► upstream subscription token
//!      └───────────────── fallback (subscribed with the output subscriber itself)
//! ```
//! Cancelling the output cancels whichever side is active.
//!
//! ## Rules
//! - The original error is never forwarded once a fallback is engaged.
//! - The recovery strategy is invoked **exactly once** per failed upstream.
//! - Single-level recovery: nesting is done by making the fallback a `CatchError`.

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use tracing::{debug, warn};

use crate::error::StreamError;
use crate::observers::Observer;
use crate::operators::Recovery;
use crate::producers::{Producer, ProducerRef};
use crate::subscription::Subscriber;

/// Lifecycle of one `CatchError` subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Upstream,
    Fallback,
    Terminated,
}

/// Producer that swaps to a fallback when `upstream` errors.
pub struct CatchError<T> {
    upstream: ProducerRef<T>,
    recovery: Recovery<T>,
}

impl<T> CatchError<T> {
    /// Wraps `upstream` with the given recovery strategy.
    pub fn new(upstream: ProducerRef<T>, recovery: Recovery<T>) -> Self {
        Self { upstream, recovery }
    }
}

impl<T: 'static> fmt::Debug for CatchError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatchError")
            .field("upstream", &self.upstream.name())
            .field("recovery", &self.recovery)
            .finish()
    }
}

impl<T: 'static> Producer<T> for CatchError<T> {
    fn name(&self) -> &str {
        "catch_error"
    }

    fn subscribe_with(&self, output: Subscriber<T>) {
        let token = output.token().child_token();
        let relay = Arc::new(Relay {
            upstream: self.upstream.name().to_owned(),
            output,
            recovery: self.recovery.clone(),
            phase: Mutex::new(Phase::Idle),
        });

        relay.advance(Phase::Idle, Phase::Upstream);
        self.upstream.subscribe_with(Subscriber::new(relay, token));
    }
}

/// Upstream-facing observer: forwards to `output` and engages the fallback.
struct Relay<T> {
    upstream: String,
    output: Subscriber<T>,
    recovery: Recovery<T>,
    phase: Mutex<Phase>,
}

impl<T> Relay<T> {
    /// Moves `from → to`; returns false (and leaves the phase alone) otherwise.
    fn advance(&self, from: Phase, to: Phase) -> bool {
        let mut phase = self.phase.lock().unwrap_or_else(PoisonError::into_inner);
        if *phase != from {
            return false;
        }
        *phase = to;
        true
    }
}

impl<T: 'static> Observer<T> for Relay<T> {
    fn on_value(&self, value: T) {
        self.output.next(value);
    }

    fn on_error(&self, error: StreamError) {
        if !self.advance(Phase::Upstream, Phase::Fallback) {
            return;
        }
        if self.output.is_closed() {
            return;
        }

        match self.recovery.fallback_for(&error) {
            Ok(fallback) => {
                debug!(
                    upstream = %self.upstream,
                    error = error.as_label(),
                    recovery = self.recovery.as_label(),
                    fallback = fallback.name(),
                    "fallback engaged"
                );
                fallback.subscribe_with(self.output.clone());
            }
            Err(e) => {
                warn!(
                    upstream = %self.upstream,
                    error = error.as_label(),
                    fallback_error = %e,
                    "fallback unavailable"
                );
                self.advance(Phase::Fallback, Phase::Terminated);
                self.output.error(e);
            }
        }
    }

    fn on_complete(&self) {
        if self.advance(Phase::Upstream, Phase::Terminated) {
            self.output.complete();
        }
    }

    fn name(&self) -> &'static str {
        "catch_error"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use tokio::time;

    use crate::notifications::{Notification, NotificationKind};
    use crate::observers::Recorder;
    use crate::operators::ProducerExt;
    use crate::producers::{Empty, Just, ProducerFn, TimedFailure};

    fn failing_now(reason: StreamError) -> ProducerRef<u32> {
        ProducerFn::arc("failing", move |s: Subscriber<u32>| {
            s.next(1);
            s.error(reason.clone());
        })
    }

    /// Counts invocations and records every error it was called with.
    fn counting_factory(
        calls: Arc<AtomicUsize>,
        seen: Arc<Mutex<Vec<StreamError>>>,
        fallback: ProducerRef<u32>,
    ) -> Recovery<u32> {
        Recovery::with(move |e: &StreamError| {
            calls.fetch_add(1, Ordering::SeqCst);
            seen.lock().unwrap().push(e.clone());
            Ok(fallback.clone())
        })
    }

    #[tokio::test(start_paused = true)]
    async fn timed_failure_with_empty_completes_silently() {
        let rec = Arc::new(Recorder::<u32>::new());
        let pipeline = TimedFailure::<u32>::timeout(Duration::from_secs(3))
            .catch_error(Recovery::Complete);

        let sub = pipeline.subscribe(rec.clone());
        assert!(!sub.is_closed());

        sub.closed().await;
        assert_eq!(rec.notifications(), vec![Notification::Complete]);
        assert_eq!(rec.count(NotificationKind::Error), 0);
        assert_eq!(rec.count(NotificationKind::Value), 0);
    }

    #[test]
    fn transparent_when_upstream_completes() {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::new(Mutex::new(Vec::new()));
        let recovery = counting_factory(calls.clone(), seen, Empty::<u32>::arc());

        let rec = Arc::new(Recorder::<u32>::new());
        Just::of([1u32, 2]).catch_error(recovery).subscribe(rec.clone());

        assert_eq!(
            rec.notifications(),
            vec![
                Notification::Value(1),
                Notification::Value(2),
                Notification::Complete
            ]
        );
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn factory_called_once_with_upstream_error() {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::new(Mutex::new(Vec::new()));
        let recovery = counting_factory(calls.clone(), seen.clone(), Just::arc([7u32]));

        let rec = Arc::new(Recorder::<u32>::new());
        failing_now(StreamError::fail("boom"))
            .catch_error(recovery)
            .subscribe(rec.clone());

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(*seen.lock().unwrap(), vec![StreamError::fail("boom")]);
        assert_eq!(
            rec.notifications(),
            vec![
                Notification::Value(1),
                Notification::Value(7),
                Notification::Complete
            ]
        );
    }

    #[test]
    fn fallback_error_is_the_final_error() {
        let rec = Arc::new(Recorder::<u32>::new());
        let recovery = Recovery::Replace(failing_now(StreamError::fail("second")));

        failing_now(StreamError::fail("first"))
            .catch_error(recovery)
            .subscribe(rec.clone());

        assert_eq!(rec.errors(), vec![StreamError::fail("second")]);
        assert_eq!(rec.values(), vec![1, 1]);
    }

    #[test]
    fn factory_err_becomes_output_error() {
        let rec = Arc::new(Recorder::<u32>::new());
        let recovery = Recovery::with(|_e: &StreamError| {
            Err(StreamError::Fallback {
                error: "no cache".into(),
            })
        });

        failing_now(StreamError::fail("boom"))
            .catch_error(recovery)
            .subscribe(rec.clone());

        assert_eq!(
            rec.notifications(),
            vec![
                Notification::Value(1),
                Notification::Error(StreamError::Fallback {
                    error: "no cache".into()
                })
            ]
        );
    }

    #[test]
    fn factory_panic_becomes_output_error() {
        let rec = Arc::new(Recorder::<u32>::new());
        let recovery = Recovery::with(|_e: &StreamError| panic!("factory exploded"));

        failing_now(StreamError::fail("boom"))
            .catch_error(recovery)
            .subscribe(rec.clone());

        assert_eq!(
            rec.errors(),
            vec![StreamError::Fallback {
                error: "factory exploded".into()
            }]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_while_upstream_pending() {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::new(Mutex::new(Vec::new()));
        let recovery = counting_factory(calls.clone(), seen, Empty::<u32>::arc());

        let rec = Arc::new(Recorder::<u32>::new());
        let sub = TimedFailure::<u32>::timeout(Duration::from_secs(3))
            .catch_error(recovery)
            .subscribe(rec.clone());

        time::sleep(Duration::from_secs(1)).await;
        sub.cancel();
        time::sleep(Duration::from_secs(10)).await;

        assert!(rec.is_empty());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_while_fallback_pending() {
        let rec = Arc::new(Recorder::<u32>::new());
        let fallback = TimedFailure::<u32>::new(Duration::from_secs(5), StreamError::fail("late"));
        let sub = TimedFailure::<u32>::timeout(Duration::from_secs(1))
            .catch_error(Recovery::replace(fallback))
            .subscribe(rec.clone());

        // upstream has failed, fallback timer is pending
        time::sleep(Duration::from_secs(2)).await;
        assert!(rec.is_empty());
        assert!(!sub.is_closed());

        sub.cancel();
        time::sleep(Duration::from_secs(10)).await;
        assert!(rec.is_empty());
    }

    #[test]
    fn late_upstream_notifications_after_fallback_are_ignored() {
        let rec = Arc::new(Recorder::<u32>::new());
        let relay = Relay::<u32> {
            upstream: "test".into(),
            output: Subscriber::new(rec.clone(), tokio_util::sync::CancellationToken::new()),
            recovery: Recovery::Complete,
            phase: Mutex::new(Phase::Upstream),
        };

        relay.on_error(StreamError::fail("first"));
        assert!(relay.output.is_closed());
        assert_eq!(*relay.phase.lock().unwrap(), Phase::Fallback);

        relay.on_complete();
        relay.on_error(StreamError::fail("second"));
        assert_eq!(*relay.phase.lock().unwrap(), Phase::Fallback);
        assert_eq!(rec.notifications(), vec![Notification::Complete]);
    }

    #[test]
    fn phase_transitions_are_guarded() {
        let relay = Relay::<u32> {
            upstream: "test".into(),
            output: Subscriber::new(
                Arc::new(Recorder::<u32>::new()),
                tokio_util::sync::CancellationToken::new(),
            ),
            recovery: Recovery::Complete,
            phase: Mutex::new(Phase::Idle),
        };

        assert!(!relay.advance(Phase::Upstream, Phase::Fallback));
        assert!(relay.advance(Phase::Idle, Phase::Upstream));
        assert!(relay.advance(Phase::Upstream, Phase::Terminated));
        assert!(!relay.advance(Phase::Upstream, Phase::Fallback));
    }
}
