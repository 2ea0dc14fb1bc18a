//! Stream notifications: the data model shared by producers and observers.
//!
//! ## Contents
//! - [`Notification`] value / error / completion signal delivered to an observer
//! - [`NotificationKind`] payload-free classification used for logs
//!
//! ## Contract
//! ```text
//! Value* (Error | Complete)?
//! ```
//! `Value` may repeat; at most one terminal notification per subscription, and
//! nothing after it. [`Subscriber`](crate::Subscriber) enforces this.

mod notification;

pub use notification::{Notification, NotificationKind};
