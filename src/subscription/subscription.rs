//! # Subscription handle returned to the consumer.
//!
//! [`Subscription`] exposes the cancellation capability of one observation.
//! It shares the token with the [`Subscriber`](crate::Subscriber) given to the
//! producer, so it also observes termination.
//!
//! ## Rules
//! - `cancel()` is idempotent; cancelling twice is a no-op.
//! - After `cancel()` no further notification reaches the observer.
//! - `closed().await` resolves on cancellation **or** terminal notification.

use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Live observation of a producer.
#[derive(Clone, Debug)]
pub struct Subscription {
    token: CancellationToken,
}

impl Subscription {
    /// Wraps the token owned by the subscription.
    pub fn new(token: CancellationToken) -> Self {
        Self { token }
    }

    /// Cancels the subscription and every resource tied to it.
    pub fn cancel(&self) {
        if !self.token.is_cancelled() {
            debug!("subscription cancelled");
        }
        self.token.cancel();
    }

    /// True once cancelled or terminated.
    pub fn is_closed(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Waits until the subscription is cancelled or delivers a terminal notification.
    pub async fn closed(&self) {
        self.token.cancelled().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancel_is_idempotent() {
        let sub = Subscription::new(CancellationToken::new());
        sub.cancel();
        sub.cancel();
        assert!(sub.is_closed());
    }

    #[tokio::test]
    async fn closed_resolves_after_cancel() {
        let sub = Subscription::new(CancellationToken::new());
        let waiter = sub.clone();
        let h = tokio::spawn(async move { waiter.closed().await });
        sub.cancel();
        h.await.unwrap();
    }
}
