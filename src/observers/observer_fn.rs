//! # Closure-backed observer (`ObserverFn`)
//!
//! [`ObserverFn`] bundles up to three optional closures. Missing callbacks
//! behave like the [`Observer`] defaults (no-op).
//!
//! ## Example
//! ```rust
//! use rxrecover::{ObserverFn, ObserverRef};
//!
//! let obs: ObserverRef<&'static str> = ObserverFn::<&'static str>::new()
//!     .with_value(|v| println!("{v}"))
//!     .with_complete(|| println!("Completed"))
//!     .arc();
//! ```

use std::fmt;
use std::sync::Arc;

use crate::error::StreamError;
use crate::observers::Observer;

type ValueFn<T> = Box<dyn Fn(T) + Send + Sync>;
type ErrorFn = Box<dyn Fn(StreamError) + Send + Sync>;
type CompleteFn = Box<dyn Fn() + Send + Sync>;

/// Observer built from optional closures.
pub struct ObserverFn<T> {
    value: Option<ValueFn<T>>,
    error: Option<ErrorFn>,
    complete: Option<CompleteFn>,
}

impl<T> ObserverFn<T> {
    /// Creates an observer with no callbacks.
    pub fn new() -> Self {
        Self {
            value: None,
            error: None,
            complete: None,
        }
    }

    /// Sets the value callback.
    pub fn with_value(mut self, f: impl Fn(T) + Send + Sync + 'static) -> Self {
        self.value = Some(Box::new(f));
        self
    }

    /// Sets the error callback.
    pub fn with_error(mut self, f: impl Fn(StreamError) + Send + Sync + 'static) -> Self {
        self.error = Some(Box::new(f));
        self
    }

    /// Sets the completion callback.
    pub fn with_complete(mut self, f: impl Fn() + Send + Sync + 'static) -> Self {
        self.complete = Some(Box::new(f));
        self
    }
}

impl<T: 'static> ObserverFn<T> {
    /// Wraps the observer into a shared handle.
    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }
}

impl<T> Default for ObserverFn<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for ObserverFn<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObserverFn")
            .field("value", &self.value.is_some())
            .field("error", &self.error.is_some())
            .field("complete", &self.complete.is_some())
            .finish()
    }
}

impl<T: 'static> Observer<T> for ObserverFn<T> {
    fn on_value(&self, value: T) {
        if let Some(f) = &self.value {
            f(value);
        }
    }

    fn on_error(&self, error: StreamError) {
        if let Some(f) = &self.error {
            f(error);
        }
    }

    fn on_complete(&self) {
        if let Some(f) = &self.complete {
            f();
        }
    }

    fn name(&self) -> &'static str {
        "observer_fn"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn missing_callbacks_are_noops() {
        let obs: ObserverFn<u32> = ObserverFn::new();
        obs.on_value(1);
        obs.on_error(StreamError::fail("ignored"));
        obs.on_complete();
    }

    #[test]
    fn callbacks_are_invoked() {
        let sum = Arc::new(AtomicUsize::new(0));
        let done = Arc::new(AtomicUsize::new(0));

        let obs = {
            let sum = sum.clone();
            let done = done.clone();
            ObserverFn::new()
                .with_value(move |v: usize| {
                    sum.fetch_add(v, Ordering::SeqCst);
                })
                .with_complete(move || {
                    done.fetch_add(1, Ordering::SeqCst);
                })
        };

        obs.on_value(2);
        obs.on_value(3);
        obs.on_complete();

        assert_eq!(sum.load(Ordering::SeqCst), 5);
        assert_eq!(done.load(Ordering::SeqCst), 1);
    }
}
