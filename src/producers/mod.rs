//! # Producers: things that can be subscribed to.
//!
//! This module provides the core producer types:
//! - [`Producer`] - trait for anything that delivers notifications to a [`Subscriber`](crate::Subscriber)
//! - [`ProducerRef`] - shared reference to a producer (`Arc<dyn Producer<T>>`)
//! - [`ProducerFn`] - closure-backed producer
//! - [`Empty`] - completes immediately, no values
//! - [`Just`] - emits fixed values, then completes
//! - [`TimedFailure`] - fails once after a delay

mod empty;
mod just;
mod producer;
mod producer_fn;
mod timed;

pub use empty::Empty;
pub use just::Just;
pub use producer::{Producer, ProducerRef};
pub use producer_fn::ProducerFn;
pub use timed::TimedFailure;
