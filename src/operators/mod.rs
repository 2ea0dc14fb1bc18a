//! Stream operators.
//!
//! This module provides the error-recovery operator and its strategy type:
//! - [`CatchError`] producer that swaps to a fallback when its upstream errors
//! - [`Recovery`] which fallback to use (complete / replace / factory)
//! - [`ProducerExt`] `.catch_error(..)` on any producer
//!
//! ## Quick wiring
//! ```text
//! TimedFailure ──.catch_error(Recovery::Complete)──► CatchError ──subscribe──► Observer
//!      └─► Error(Timeout) ─► Recovery::fallback_for ─► Empty ─► Complete
//! ```

mod catch;
mod recovery;

use std::sync::Arc;

use crate::producers::Producer;

pub use catch::CatchError;
pub use recovery::{FallbackFn, Recovery};

/// Operator methods available on every producer.
///
/// # Example
/// ```rust
/// use std::sync::Arc;
/// use rxrecover::{Just, Notification, Producer, ProducerExt, Recorder, Recovery};
///
/// let rec = Arc::new(Recorder::<u32>::new());
/// Just::of([1u32, 2]).catch_error(Recovery::Complete).subscribe(rec.clone());
/// assert_eq!(rec.values(), vec![1, 2]);
/// ```
pub trait ProducerExt<T>: Producer<T> + Sized {
    /// Wraps `self` so that an error is replaced by the fallback `recovery` resolves.
    fn catch_error(self, recovery: Recovery<T>) -> CatchError<T> {
        CatchError::new(Arc::new(self), recovery)
    }
}

impl<T, P: Producer<T>> ProducerExt<T> for P {}
