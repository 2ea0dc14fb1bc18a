//! # Function-backed producer (`ProducerFn`)
//!
//! [`ProducerFn`] wraps a closure `F: Fn(Subscriber<T>)`, invoked once per
//! subscription. Nothing is shared between subscriptions unless the closure
//! captures it explicitly (use `Arc<...>` for that).
//!
//! ## Example
//! ```rust
//! use rxrecover::{Producer, ProducerFn, ProducerRef, Subscriber};
//!
//! let p: ProducerRef<u32> = ProducerFn::arc("one-two", |s: Subscriber<u32>| {
//!     s.next(1);
//!     s.next(2);
//!     s.complete();
//! });
//!
//! assert_eq!(p.name(), "one-two");
//! ```

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::producers::Producer;
use crate::subscription::Subscriber;

/// Function-backed producer implementation.
pub struct ProducerFn<F> {
    name: Cow<'static, str>,
    f: F,
}

impl<F> ProducerFn<F> {
    /// Creates a new function-backed producer.
    ///
    /// Prefer [`ProducerFn::arc`] when you immediately need a [`ProducerRef`](crate::ProducerRef).
    pub fn new(name: impl Into<Cow<'static, str>>, f: F) -> Self {
        Self {
            name: name.into(),
            f,
        }
    }

    /// Creates the producer and returns it as a shared handle.
    pub fn arc(name: impl Into<Cow<'static, str>>, f: F) -> Arc<Self> {
        Arc::new(Self::new(name, f))
    }
}

impl<F> fmt::Debug for ProducerFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProducerFn")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl<T, F> Producer<T> for ProducerFn<F>
where
    T: 'static,
    F: Fn(Subscriber<T>) + Send + Sync + 'static,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn subscribe_with(&self, subscriber: Subscriber<T>) {
        (self.f)(subscriber);
    }
}
