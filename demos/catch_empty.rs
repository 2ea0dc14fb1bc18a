//! Hide a failing source's error by falling back to an empty producer.
//!
//! The source fails with a timeout after 3 seconds; the output completes
//! silently instead of reporting the error.
//!
//! Expected output:
//! ```text
//! App started
//! Completed
//! ```
//!
//! Run with `cargo run --example catch_empty --features logging`.
//! Set `RUST_LOG=rxrecover=debug` to see the pipeline internals.

use std::sync::Arc;

use rxrecover::{Config, LogWriter, Producer, ProducerExt, Recovery, TimedFailure};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let failing_request = TimedFailure::<String>::with_defaults(&Config::default());

    println!("App started");

    let sub = failing_request
        .catch_error(Recovery::Complete)
        .subscribe(Arc::new(LogWriter));

    sub.closed().await;
    Ok(())
}
