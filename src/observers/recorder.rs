//! # Recorder: observer that keeps every notification
//!
//! [`Recorder`] appends each delivered [`Notification`] to an in-memory log.
//! Useful for tests and for inspecting what a pipeline actually delivered.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use rxrecover::{Empty, Notification, Producer, Recorder};
//!
//! let rec = Arc::new(Recorder::<u32>::new());
//! Empty::<u32>::new().subscribe(rec.clone());
//! assert_eq!(rec.notifications(), vec![Notification::Complete]);
//! ```

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::error::StreamError;
use crate::notifications::{Notification, NotificationKind};
use crate::observers::Observer;

/// Observer recording all notifications in delivery order.
#[derive(Debug)]
pub struct Recorder<T> {
    log: Mutex<Vec<Notification<T>>>,
}

impl<T> Recorder<T> {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            log: Mutex::new(Vec::new()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Notification<T>>> {
        self.log.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn push(&self, n: Notification<T>) {
        self.lock().push(n);
    }

    /// Number of notifications of the given kind.
    pub fn count(&self, kind: NotificationKind) -> usize {
        self.lock().iter().filter(|n| n.kind() == kind).count()
    }

    /// Number of recorded notifications.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// True if nothing was delivered yet.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Errors delivered so far.
    pub fn errors(&self) -> Vec<StreamError> {
        self.lock()
            .iter()
            .filter_map(|n| match n {
                Notification::Error(e) => Some(e.clone()),
                _ => None,
            })
            .collect()
    }
}

impl<T: Clone> Recorder<T> {
    /// Snapshot of everything delivered so far.
    pub fn notifications(&self) -> Vec<Notification<T>> {
        self.lock().clone()
    }

    /// Values delivered so far.
    pub fn values(&self) -> Vec<T> {
        self.lock()
            .iter()
            .filter_map(|n| match n {
                Notification::Value(v) => Some(v.clone()),
                _ => None,
            })
            .collect()
    }
}

impl<T> Default for Recorder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Send + 'static> Observer<T> for Recorder<T> {
    fn on_value(&self, value: T) {
        self.push(Notification::Value(value));
    }

    fn on_error(&self, error: StreamError) {
        self.push(Notification::Error(error));
    }

    fn on_complete(&self) {
        self.push(Notification::Complete);
    }

    fn name(&self) -> &'static str {
        "recorder"
    }
}
