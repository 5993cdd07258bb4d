// SPDX-License-Identifier: MPL-2.0
//! `toast_queue` is a keyed, auto-expiring notification queue for GUI
//! applications.
//!
//! It keeps an ordered, in-memory list of transient messages (info /
//! warning / error / success) with deduplication by an optional key, timed
//! expiry for notifications added with a display timeout, and an optional
//! diagnostic log that retains warning and error messages after their
//! toasts disappear.
//!
//! The queue performs no rendering: the host UI reads
//! [`Queue::notifications`] to draw its toasts and feeds user or
//! application events back in through the mutation methods or
//! [`queue::Message`].
//!
//! # Usage
//!
//! ```
//! use toast_queue::{Clear, Notification, Queue};
//!
//! let mut queue = Queue::new();
//! queue.add_success("Image saved");
//! queue.add(Notification::warning("Connection lost").with_key("conn-lost"));
//!
//! // A second toast for the same logical event is deduplicated away.
//! queue.add(Notification::warning("Connection lost").with_key("conn-lost"));
//! assert_eq!(queue.len(), 2);
//!
//! // Connection came back: drop the stale warning.
//! queue.clear(Clear::ByKey("conn-lost".to_string()));
//! assert_eq!(queue.len(), 1);
//! ```

pub mod diagnostics;
pub mod error;
pub mod notification;
pub mod queue;
pub mod timer;

pub use error::{Error, Result};
pub use notification::{Level, Notification, NotificationId};
pub use queue::{Clear, Message, Queue, DISPLAY_TIMEOUT};
