//! # Empty producer.
//!
//! [`Empty`] completes synchronously on subscription: no values, no deferred
//! work, nothing to cancel. Used as the "swallow the error" fallback.

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::producers::Producer;
use crate::subscription::Subscriber;

/// Producer that completes immediately.
pub struct Empty<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> Empty<T> {
    /// Creates the producer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }

    /// Creates the producer as a shared handle.
    pub fn arc() -> Arc<Self> {
        Arc::new(Self::new())
    }
}

impl<T> Default for Empty<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Empty<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Empty<T> {}

impl<T> fmt::Debug for Empty<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Empty")
    }
}

impl<T: 'static> Producer<T> for Empty<T> {
    fn name(&self) -> &str {
        "empty"
    }

    fn subscribe_with(&self, subscriber: Subscriber<T>) {
        subscriber.complete();
    }
}
