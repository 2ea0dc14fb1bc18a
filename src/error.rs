//! Error types carried by stream notifications.
//!
//! This module defines a single enum, [`StreamError`], which is the payload of
//! every [`Notification::Error`](crate::Notification::Error).
//!
//! It provides helper methods (`as_label`, `as_message`) for logging and
//! [`StreamError::is_timeout`] for recovery strategies that only care about
//! timeouts.

use std::time::Duration;
use thiserror::Error;

/// # Errors delivered through a stream.
///
/// These are opaque reasons reported by a producer. The recovery operator
/// treats every variant the same way: it absorbs the error and subscribes to a
/// fallback instead.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StreamError {
    /// Upstream gave up waiting for a result.
    #[error("timed out after {after:?}")]
    Timeout {
        /// How long the upstream waited before failing.
        after: Duration,
    },

    /// Upstream failed for a domain-specific reason.
    #[error("upstream failed: {error}")]
    Fail {
        /// The underlying error message.
        error: String,
    },

    /// The fallback factory could not produce a replacement producer.
    ///
    /// Raised when the factory returns an error or panics while being invoked.
    #[error("fallback failed: {error}")]
    Fallback {
        /// The underlying error message.
        error: String,
    },
}

impl StreamError {
    /// Shorthand for [`StreamError::Fail`].
    pub fn fail(error: impl Into<String>) -> Self {
        StreamError::Fail {
            error: error.into(),
        }
    }

    /// Returns a short stable label (snake_case) for use in logs.
    ///
    /// # Example
    /// ```
    /// use rxrecover::StreamError;
    /// use std::time::Duration;
    ///
    /// let err = StreamError::Timeout { after: Duration::from_secs(3) };
    /// assert_eq!(err.as_label(), "stream_timeout");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            StreamError::Timeout { .. } => "stream_timeout",
            StreamError::Fail { .. } => "stream_failed",
            StreamError::Fallback { .. } => "stream_fallback_failed",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            StreamError::Timeout { after } => format!("timeout: {after:?}"),
            StreamError::Fail { error } => format!("error: {error}"),
            StreamError::Fallback { error } => format!("fallback: {error}"),
        }
    }

    /// Indicates whether the upstream reported a timeout.
    ///
    /// # Example
    /// ```
    /// use rxrecover::StreamError;
    /// use std::time::Duration;
    ///
    /// assert!(StreamError::Timeout { after: Duration::from_secs(1) }.is_timeout());
    /// assert!(!StreamError::fail("boom").is_timeout());
    /// ```
    pub fn is_timeout(&self) -> bool {
        matches!(self, StreamError::Timeout { .. })
    }
}
