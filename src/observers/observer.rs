//! # Observer trait.
//!
//! Provides [`Observer`], the triple of callbacks a consumer hands to
//! [`Producer::subscribe`](crate::Producer::subscribe).
//!
//! Every callback has a no-op default, so an implementation only overrides
//! what it cares about.
//!
//! ## Rules
//! - Callbacks run synchronously in the delivering producer's context.
//! - `on_value` may be called any number of times, then at most one of
//!   `on_error` / `on_complete`.
//! - Nothing is delivered after a terminal callback.

use std::sync::Arc;

use crate::error::StreamError;

/// Shared handle to an observer.
pub type ObserverRef<T> = Arc<dyn Observer<T>>;

/// Receiver of stream notifications.
///
/// ### Implementation requirements
/// - Do not block; callbacks run inline with the producer.
/// - Do not panic; a panicking observer unwinds through the producer.
pub trait Observer<T>: Send + Sync + 'static {
    /// Called for each emitted value.
    fn on_value(&self, value: T) {
        let _ = value;
    }

    /// Called once if the stream fails.
    fn on_error(&self, error: StreamError) {
        let _ = error;
    }

    /// Called once if the stream finishes.
    fn on_complete(&self) {}

    /// Returns the observer name used in logs.
    ///
    /// The default uses `type_name::<Self>()`, which can be verbose - override it when possible.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
