//! # Pipeline configuration.
//!
//! Provides [`Config`], the defaults used when building timed producers.
//!
//! Config is consumed by [`TimedFailure::with_defaults`](crate::TimedFailure::with_defaults).
//!
//! ## Sentinel values
//! - `delay = 0s` → the deferred action fires on the next scheduler turn
//! - `reason = None` → the source fails with [`StreamError::Timeout`]

use std::time::Duration;

use crate::error::StreamError;

/// Defaults for timed producers.
///
/// ## Field semantics
/// - `delay`: How long a timed source waits before delivering its terminal notification
/// - `reason`: Failure message reported by the source (`None` = timeout)
///
/// ## Notes
/// All fields are public for flexibility. Prefer [`Config::failure`] over
/// matching on `reason` directly.
#[derive(Clone, Debug)]
pub struct Config {
    /// Delay before the deferred action fires.
    pub delay: Duration,

    /// Failure message delivered by the source.
    ///
    /// - `None` = [`StreamError::Timeout`] carrying `delay`
    /// - `Some(msg)` = [`StreamError::Fail`] carrying `msg`
    pub reason: Option<String>,
}

impl Config {
    /// Returns the error a timed source built from this config delivers.
    ///
    /// # Example
    /// ```
    /// use rxrecover::{Config, StreamError};
    /// use std::time::Duration;
    ///
    /// let cfg = Config::default();
    /// assert_eq!(cfg.failure(), StreamError::Timeout { after: Duration::from_secs(3) });
    /// ```
    pub fn failure(&self) -> StreamError {
        match &self.reason {
            None => StreamError::Timeout { after: self.delay },
            Some(msg) => StreamError::fail(msg.clone()),
        }
    }
}

impl Default for Config {
    /// Default configuration:
    ///
    /// - `delay = 3s`
    /// - `reason = None` (timeout)
    fn default() -> Self {
        Self {
            delay: Duration::from_secs(3),
            reason: None,
        }
    }
}
