//! # rxrecover
//!
//! **rxrecover** is a minimal reactive producer/observer pipeline built around
//! one error-recovery operator: [`CatchError`].
//!
//! A producer delivers notifications (values, then at most one error or
//! completion) to an observer. `CatchError` passes values and completion
//! through unchanged, but when its upstream fails it swallows the error and
//! subscribes to a fallback producer instead.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!  ┌──────────────────┐        ┌──────────────────┐
//!  │   TimedFailure   │        │  Empty / Just /  │
//!  │ (timer → Error)  │        │   ProducerFn     │
//!  └────────┬─────────┘        └────────┬─────────┘
//!           │ upstream                  │ fallback (resolved by Recovery)
//!           ▼                           ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CatchError                                                 │
//! │  - Relay observer on the upstream (child token)             │
//! │  - Recovery::fallback_for(error) on Error                   │
//! │  - fallback subscribed with the output Subscriber           │
//! └─────────────────────────────┬───────────────────────────────┘
//!                               ▼
//!                    Subscriber (terminal-once, token)
//!                               ▼
//!                     Observer::on_value / on_error / on_complete
//! ```
//!
//! ### Lifecycle
//! ```text
//! producer.subscribe(observer)
//!   ├─► token = CancellationToken::new()
//!   ├─► producer.subscribe_with(Subscriber { observer, token })
//!   └─► Subscription { token }        (cancel / closed().await)
//!
//! TimedFailure ── CancellableTimer(delay) ──► Error(Timeout)
//!   └─► CatchError: Upstream ─► Fallback ─► Recovery::Complete ─► Empty ─► Complete
//! ```
//!
//! ## Features
//! | Area              | Description                                              | Key types / traits                        |
//! |-------------------|----------------------------------------------------------|-------------------------------------------|
//! | **Producers**     | Sources of notifications.                                | [`Producer`], [`Empty`], [`Just`], [`TimedFailure`], [`ProducerFn`] |
//! | **Observers**     | Consumer callbacks.                                      | [`Observer`], [`ObserverFn`], [`Recorder`] |
//! | **Subscriptions** | Cancellation, terminal-once delivery, deferred actions.  | [`Subscription`], [`Subscriber`], [`CancellableTimer`] |
//! | **Recovery**      | Fallback on error.                                       | [`CatchError`], [`Recovery`], [`ProducerExt`] |
//! | **Errors**        | Typed stream errors.                                     | [`StreamError`]                           |
//! | **Configuration** | Defaults for timed producers.                            | [`Config`]                                |
//!
//! ## Optional features
//! - `logging`: exports a simple built-in [`LogWriter`] _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use std::time::Duration;
//! use rxrecover::{NotificationKind, Producer, ProducerExt, Recorder, Recovery, TimedFailure};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let failing = TimedFailure::<String>::timeout(Duration::from_millis(10));
//!     let rec = Arc::new(Recorder::<String>::new());
//!
//!     let sub = failing.catch_error(Recovery::Complete).subscribe(rec.clone());
//!     sub.closed().await;
//!
//!     assert_eq!(rec.count(NotificationKind::Complete), 1);
//!     assert!(rec.errors().is_empty());
//! }
//! ```
mod config;
mod error;
mod notifications;
mod observers;
mod operators;
mod producers;
mod subscription;

// ---- Public re-exports ----

pub use config::Config;
pub use error::StreamError;
pub use notifications::{Notification, NotificationKind};
pub use observers::{Observer, ObserverFn, ObserverRef, Recorder};
pub use operators::{CatchError, FallbackFn, ProducerExt, Recovery};
pub use producers::{Empty, Just, Producer, ProducerFn, ProducerRef, TimedFailure};
pub use subscription::{CancellableTimer, Subscriber, Subscription};

// Optional: expose a simple built-in console observer (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use observers::LogWriter;
