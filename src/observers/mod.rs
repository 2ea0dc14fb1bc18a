//! # Observers: consumer-side notification handlers.
//!
//! This module provides the [`Observer`] trait and built-in implementations
//! that receive [`Notification`](crate::Notification)s from a subscription.
//!
//! ## Architecture
//! ```text
//! Producer ── Subscriber::next/error/complete ──► Observer
//!                                                    │
//!                              ┌─────────────┬───────┴──────┬────────────┐
//!                              ▼             ▼              ▼            ▼
//!                          ObserverFn     Recorder      LogWriter     Custom
//!                        (closures)   (collects all)   (stdout)
//! ```
//!
//! ## Implementing custom observers
//! ```no_run
//! use rxrecover::Observer;
//!
//! struct Counter(std::sync::atomic::AtomicUsize);
//!
//! impl Observer<u32> for Counter {
//!     fn on_value(&self, _value: u32) {
//!         self.0.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
//!     }
//!
//!     fn name(&self) -> &'static str { "counter" }
//! }
//! ```

mod observer;
mod observer_fn;
mod recorder;

#[cfg(feature = "logging")]
mod log;

pub use observer::{Observer, ObserverRef};
pub use observer_fn::ObserverFn;
pub use recorder::Recorder;

#[cfg(feature = "logging")]
pub use log::LogWriter;
