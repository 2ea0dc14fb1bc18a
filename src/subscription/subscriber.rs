//! # Subscriber: producer-facing side of a subscription.
//!
//! [`Subscriber`] wraps the consumer's observer and the subscription token.
//! Producers only ever talk to a `Subscriber`, never to the observer directly.
//!
//! ## Rules
//! - Values are delivered while the subscription is open.
//! - The **first** terminal notification is delivered, then the token is
//!   cancelled; the subscription is closed from then on.
//! - Anything delivered after close (terminal or cancelled) is dropped.
//! - Clones share state: closing one closes all.
//! - Cancellation is checked before each delivery, not held across it. A
//!   cancel issued from another thread while a notification is already being
//!   delivered does not interrupt it; the next notification is dropped.
//!
//! ```text
//! Open ──next()──► Open
//!   │
//!   ├──error()/complete()──► Terminated  (observer notified once, token cancelled)
//!   └──token.cancel()──────► Cancelled   (observer never notified again)
//! ```

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio_util::sync::CancellationToken;
use tracing::trace;

use crate::error::StreamError;
use crate::notifications::Notification;
use crate::observers::ObserverRef;

struct Inner<T> {
    observer: ObserverRef<T>,
    token: CancellationToken,
    terminated: AtomicBool,
}

/// Sink a producer delivers notifications into.
pub struct Subscriber<T> {
    inner: Arc<Inner<T>>,
}

impl<T> Clone for Subscriber<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: 'static> fmt::Debug for Subscriber<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscriber")
            .field("observer", &self.inner.observer.name())
            .field("terminated", &self.inner.terminated.load(Ordering::Acquire))
            .field("cancelled", &self.inner.token.is_cancelled())
            .finish()
    }
}

impl<T: 'static> Subscriber<T> {
    /// Creates a subscriber delivering to `observer`, closed by `token`.
    pub fn new(observer: ObserverRef<T>, token: CancellationToken) -> Self {
        Self {
            inner: Arc::new(Inner {
                observer,
                token,
                terminated: AtomicBool::new(false),
            }),
        }
    }

    /// Token owning every resource of this subscription.
    ///
    /// Derive child tokens from it for inner work (timers, upstreams).
    pub fn token(&self) -> &CancellationToken {
        &self.inner.token
    }

    /// True once a terminal notification was delivered or the subscription was cancelled.
    pub fn is_closed(&self) -> bool {
        self.inner.terminated.load(Ordering::Acquire) || self.inner.token.is_cancelled()
    }

    /// Delivers one notification, enforcing the terminal-once contract.
    pub fn notify(&self, n: Notification<T>) {
        let terminal = n.is_terminal();
        let closed = if terminal {
            self.inner.terminated.swap(true, Ordering::AcqRel)
        } else {
            self.inner.terminated.load(Ordering::Acquire)
        };

        if closed || self.inner.token.is_cancelled() {
            trace!(
                observer = self.inner.observer.name(),
                notification = n.as_label(),
                "dropped after close"
            );
            return;
        }

        n.deliver(self.inner.observer.as_ref());
        if terminal {
            self.inner.token.cancel();
        }
    }

    /// Delivers a value.
    #[inline]
    pub fn next(&self, value: T) {
        self.notify(Notification::Value(value));
    }

    /// Delivers a terminal error.
    #[inline]
    pub fn error(&self, error: StreamError) {
        self.notify(Notification::Error(error));
    }

    /// Delivers a terminal completion.
    #[inline]
    pub fn complete(&self) {
        self.notify(Notification::Complete);
    }
}
