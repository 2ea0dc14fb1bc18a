//! Replace a failing source's error with a fallback value.
//!
//! Expected output:
//! ```text
//! App started
//! fallback value
//! Completed
//! ```
//!
//! Run with `cargo run --example catch_fallback_value --features logging`.

use std::sync::Arc;

use rxrecover::{
    Config, Just, LogWriter, Producer, ProducerExt, ProducerRef, Recovery, StreamError,
    TimedFailure,
};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cfg = Config::default();
    let failing_request: TimedFailure<&'static str> = TimedFailure::with_defaults(&cfg);

    println!("App started");

    let recovery = Recovery::with(|err: &StreamError| {
        tracing::info!(error = %err, "serving fallback");
        Ok(Just::arc(["fallback value"]) as ProducerRef<&'static str>)
    });

    let sub = failing_request
        .catch_error(recovery)
        .subscribe(Arc::new(LogWriter));

    sub.closed().await;
    Ok(())
}
