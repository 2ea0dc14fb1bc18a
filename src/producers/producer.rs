//! # Producer abstraction.
//!
//! A [`Producer`] has a stable [`name`](Producer::name) and a
//! [`subscribe_with`](Producer::subscribe_with) method that receives a
//! [`Subscriber`]. Consumers normally call [`subscribe`](Producer::subscribe),
//! which allocates the subscription token and returns the [`Subscription`] handle.
//!
//! Producers are cold: nothing happens until someone subscribes, and each
//! subscription runs independently.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::observers::ObserverRef;
use crate::subscription::{Subscriber, Subscription};

/// Shared handle to a producer.
pub type ProducerRef<T> = Arc<dyn Producer<T>>;

/// # Source of notifications.
///
/// # Example
/// ```
/// use rxrecover::{Producer, Subscriber};
///
/// struct Countdown;
///
/// impl Producer<u32> for Countdown {
///     fn name(&self) -> &str { "countdown" }
///
///     fn subscribe_with(&self, subscriber: Subscriber<u32>) {
///         for n in (1..=3).rev() {
///             if subscriber.is_closed() {
///                 return;
///             }
///             subscriber.next(n);
///         }
///         subscriber.complete();
///     }
/// }
/// ```
pub trait Producer<T>: Send + Sync + 'static {
    /// Returns a stable, human-readable producer name.
    fn name(&self) -> &str;

    /// Starts delivering into `subscriber`.
    ///
    /// Implementations must tie any deferred work to `subscriber.token()` so that
    /// cancellation stops it.
    fn subscribe_with(&self, subscriber: Subscriber<T>);

    /// Subscribes `observer` and returns the handle of the new subscription.
    ///
    /// # Panics
    /// Producers with deferred work (such as [`TimedFailure`](crate::TimedFailure))
    /// spawn onto the tokio runtime and panic when called outside of one.
    fn subscribe(&self, observer: ObserverRef<T>) -> Subscription
    where
        T: 'static,
    {
        let token = CancellationToken::new();
        debug!(
            producer = self.name(),
            observer = observer.name(),
            "subscribe"
        );
        self.subscribe_with(Subscriber::new(observer, token.clone()));
        Subscription::new(token)
    }
}

impl<T: 'static> Producer<T> for ProducerRef<T> {
    fn name(&self) -> &str {
        self.as_ref().name()
    }

    fn subscribe_with(&self, subscriber: Subscriber<T>) {
        self.as_ref().subscribe_with(subscriber);
    }
}
