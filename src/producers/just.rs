//! # Fixed-value producer.
//!
//! [`Just`] delivers each configured value in order, then completes, all
//! synchronously on subscription. Typical use: a fallback that substitutes a
//! default value for a failed source.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use rxrecover::{Just, Notification, Producer, Recorder};
//!
//! let rec = Arc::new(Recorder::<&str>::new());
//! Just::of(["fallback value"]).subscribe(rec.clone());
//!
//! assert_eq!(
//!     rec.notifications(),
//!     vec![Notification::Value("fallback value"), Notification::Complete],
//! );
//! ```

use std::sync::Arc;

use crate::producers::Producer;
use crate::subscription::Subscriber;

/// Producer emitting a fixed sequence of values.
#[derive(Clone, Debug)]
pub struct Just<T> {
    values: Vec<T>,
}

impl<T> Just<T> {
    /// Creates a producer emitting `values` in order.
    pub fn new(values: Vec<T>) -> Self {
        Self { values }
    }

    /// Creates a producer from any iterable.
    pub fn of(values: impl IntoIterator<Item = T>) -> Self {
        Self::new(values.into_iter().collect())
    }

    /// Creates the producer as a shared handle.
    pub fn arc(values: impl IntoIterator<Item = T>) -> Arc<Self> {
        Arc::new(Self::of(values))
    }
}

impl<T> Producer<T> for Just<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn name(&self) -> &str {
        "just"
    }

    fn subscribe_with(&self, subscriber: Subscriber<T>) {
        for v in &self.values {
            if subscriber.is_closed() {
                return;
            }
            subscriber.next(v.clone());
        }
        subscriber.complete();
    }
}
