//! # Subscriptions: the live link between a producer and an observer.
//!
//! ## Contents
//! - [`Subscriber`] producer-facing sink; enforces the notification contract
//! - [`Subscription`] consumer-facing handle; cancellation and completion wait
//! - [`CancellableTimer`] deferred action tied to a subscription's token
//!
//! ## Wiring
//! ```text
//! Producer::subscribe(observer)
//!     ├─► token = CancellationToken::new()
//!     ├─► Subscriber { observer, token }  ──► handed to the producer
//!     └─► Subscription { token }          ──► returned to the consumer
//!
//! terminal notification ─► token.cancel()   (resources released)
//! Subscription::cancel() ─► token.cancel()  (timers/upstreams stop)
//! ```
//!
//! Every resource a producer allocates for one subscription (timers, inner
//! subscriptions) hangs off that subscription's token or a child of it.

mod subscriber;
#[allow(clippy::module_inception)]
mod subscription;
mod timer;

pub use subscriber::Subscriber;
pub use subscription::Subscription;
pub use timer::CancellableTimer;
