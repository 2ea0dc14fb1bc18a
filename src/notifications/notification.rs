//! # Notifications delivered by producers.
//!
//! [`Notification`] is the tagged union every producer speaks. [`NotificationKind`]
//! is its payload-free counterpart, handy for logging.
//!
//! ## Example
//! ```rust
//! use rxrecover::{Notification, NotificationKind, StreamError};
//!
//! let n: Notification<u32> = Notification::Error(StreamError::fail("boom"));
//! assert_eq!(n.kind(), NotificationKind::Error);
//! assert!(n.is_terminal());
//! assert_eq!(n.as_label(), "error");
//! ```

use crate::error::StreamError;
use crate::observers::Observer;

/// Classification of notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// Ordinary value; may repeat.
    Value,
    /// Terminal failure.
    Error,
    /// Terminal success.
    Complete,
}

/// Signal delivered to an [`Observer`].
#[derive(Debug, Clone, PartialEq)]
pub enum Notification<T> {
    /// An emitted value.
    Value(T),
    /// Producer failed; terminal.
    Error(StreamError),
    /// Producer finished; terminal.
    Complete,
}

impl<T> Notification<T> {
    /// Returns the payload-free kind of this notification.
    #[inline]
    pub fn kind(&self) -> NotificationKind {
        match self {
            Notification::Value(_) => NotificationKind::Value,
            Notification::Error(_) => NotificationKind::Error,
            Notification::Complete => NotificationKind::Complete,
        }
    }

    /// True for `Error` and `Complete`.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Notification::Value(_))
    }

    /// Returns a short stable label for use in logs.
    pub fn as_label(&self) -> &'static str {
        match self {
            Notification::Value(_) => "value",
            Notification::Error(_) => "error",
            Notification::Complete => "complete",
        }
    }

    /// Dispatches this notification to the matching observer callback.
    pub fn deliver<O>(self, observer: &O)
    where
        O: Observer<T> + ?Sized,
    {
        match self {
            Notification::Value(v) => observer.on_value(v),
            Notification::Error(e) => observer.on_error(e),
            Notification::Complete => observer.on_complete(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observers::Recorder;

    #[test]
    fn value_is_not_terminal() {
        let n = Notification::Value(7);
        assert_eq!(n.kind(), NotificationKind::Value);
        assert!(!n.is_terminal());
        assert!(Notification::<u8>::Complete.is_terminal());
    }

    #[test]
    fn deliver_routes_to_callbacks() {
        let rec = Recorder::new();
        Notification::Value(1).deliver(&rec);
        Notification::<i32>::Complete.deliver(&rec);
        assert_eq!(
            rec.notifications(),
            vec![Notification::Value(1), Notification::Complete]
        );
    }
}
