//! # LogWriter: simple console observer
//!
//! A minimal observer that prints incoming notifications to stdout.
//! Use it for test or demo.
//!
//! ## Example output
//! ```text
//! fallback value
//! Completed
//! [error] label=stream_timeout err="timed out after 3s"
//! ```

use std::fmt::Display;

use crate::error::StreamError;
use crate::observers::Observer;

/// Console writer observer.
#[derive(Default, Debug, Clone, Copy)]
pub struct LogWriter;

impl LogWriter {
    /// Construct a new [`LogWriter`].
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl<T: Display + 'static> Observer<T> for LogWriter {
    fn on_value(&self, value: T) {
        println!("{value}");
    }

    fn on_error(&self, error: StreamError) {
        println!(
            "[error] label={} err={:?}",
            error.as_label(),
            error.to_string()
        );
    }

    fn on_complete(&self) {
        println!("Completed");
    }

    fn name(&self) -> &'static str {
        "LogWriter"
    }
}
