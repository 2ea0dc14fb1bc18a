//! # Recovery strategies for [`CatchError`](crate::CatchError).
//!
//! [`Recovery`] decides **which producer to subscribe to next**, given the
//! error the upstream reported.
//!
//! - [`Recovery::Complete`] swallow the error; the output completes silently.
//! - [`Recovery::Replace`] subscribe to a fixed fallback producer.
//! - [`Recovery::With`] ask a factory for a fallback, based on the error.
//!
//! ## Factory failures
//! A factory may fail synchronously in two ways:
//! - it returns `Err(e)`: `e` becomes the output error as-is;
//! - it panics: the panic is caught and reported as [`StreamError::Fallback`].
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use std::time::Duration;
//! use rxrecover::{Just, ProducerRef, Recovery, StreamError};
//!
//! let recovery: Recovery<&'static str> = Recovery::with(|err: &StreamError| {
//!     if err.is_timeout() {
//!         Ok(Arc::new(Just::of(["cached"])) as ProducerRef<&'static str>)
//!     } else {
//!         Err(err.clone())
//!     }
//! });
//!
//! let timeout = StreamError::Timeout { after: Duration::from_secs(3) };
//! assert!(recovery.fallback_for(&timeout).is_ok());
//! assert_eq!(recovery.fallback_for(&StreamError::fail("x")).err(), Some(StreamError::fail("x")));
//! ```

use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use crate::error::StreamError;
use crate::producers::{Empty, Producer, ProducerRef};

/// Factory turning an upstream error into a fallback producer.
pub type FallbackFn<T> =
    Arc<dyn Fn(&StreamError) -> Result<ProducerRef<T>, StreamError> + Send + Sync>;

/// What to subscribe to after the upstream fails.
pub enum Recovery<T> {
    /// Complete the output without values (fallback is [`Empty`]).
    Complete,
    /// Subscribe to this producer.
    Replace(ProducerRef<T>),
    /// Ask the factory for a producer.
    With(FallbackFn<T>),
}

impl<T: 'static> Recovery<T> {
    /// Builds a [`Recovery::Replace`] from any producer.
    pub fn replace(fallback: impl Producer<T>) -> Self {
        Recovery::Replace(Arc::new(fallback) as ProducerRef<T>)
    }

    /// Builds a [`Recovery::With`] from a closure.
    pub fn with<F>(f: F) -> Self
    where
        F: Fn(&StreamError) -> Result<ProducerRef<T>, StreamError> + Send + Sync + 'static,
    {
        Recovery::With(Arc::new(f))
    }

    /// Resolves the fallback producer for `error`.
    ///
    /// Called exactly once per failed upstream subscription.
    pub fn fallback_for(&self, error: &StreamError) -> Result<ProducerRef<T>, StreamError> {
        match self {
            Recovery::Complete => Ok(Empty::<T>::arc() as ProducerRef<T>),
            Recovery::Replace(p) => Ok(Arc::clone(p)),
            Recovery::With(f) => match panic::catch_unwind(AssertUnwindSafe(|| f(error))) {
                Ok(res) => res,
                Err(payload) => Err(StreamError::Fallback {
                    error: panic_message(payload.as_ref()),
                }),
            },
        }
    }
}

impl<T> Recovery<T> {
    /// Returns a short stable label for use in logs.
    pub fn as_label(&self) -> &'static str {
        match self {
            Recovery::Complete => "complete",
            Recovery::Replace(_) => "replace",
            Recovery::With(_) => "with",
        }
    }
}

impl<T> Clone for Recovery<T> {
    fn clone(&self) -> Self {
        match self {
            Recovery::Complete => Recovery::Complete,
            Recovery::Replace(p) => Recovery::Replace(Arc::clone(p)),
            Recovery::With(f) => Recovery::With(Arc::clone(f)),
        }
    }
}

impl<T> Default for Recovery<T> {
    /// Returns [`Recovery::Complete`].
    fn default() -> Self {
        Recovery::Complete
    }
}

impl<T: 'static> fmt::Debug for Recovery<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recovery::Complete => f.write_str("Complete"),
            Recovery::Replace(p) => f.debug_tuple("Replace").field(&p.name()).finish(),
            Recovery::With(_) => f.write_str("With(..)"),
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "fallback factory panicked".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::producers::Just;

    #[test]
    fn complete_resolves_to_empty() {
        let r: Recovery<u32> = Recovery::default();
        let p = r.fallback_for(&StreamError::fail("x")).unwrap();
        assert_eq!(p.name(), "empty");
        assert_eq!(r.as_label(), "complete");
    }

    #[test]
    fn replace_hands_out_the_same_producer() {
        let r = Recovery::replace(Just::of([1u32]));
        let a = r.fallback_for(&StreamError::fail("x")).unwrap();
        let b = r.fallback_for(&StreamError::fail("y")).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn factory_sees_the_error() {
        let r: Recovery<String> = Recovery::with(|e: &StreamError| {
            Ok(Arc::new(Just::of([e.as_message()])) as ProducerRef<String>)
        });
        let p = r.fallback_for(&StreamError::fail("boom")).unwrap();
        assert_eq!(p.name(), "just");
    }

    #[test]
    fn factory_panic_becomes_fallback_error() {
        let r: Recovery<u32> = Recovery::with(|_e: &StreamError| panic!("no fallback today"));
        let err = r.fallback_for(&StreamError::fail("x")).err();
        assert_eq!(
            err,
            Some(StreamError::Fallback {
                error: "no fallback today".into()
            })
        );
    }
}
