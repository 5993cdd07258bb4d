// SPDX-License-Identifier: MPL-2.0
//! Deadline-driven tick scheduling.
//!
//! Hosts with an async event loop can sleep until the queue's next expiry
//! deadline instead of polling on a fixed interval. The pattern is: while
//! [`crate::Queue::next_deadline`] returns `Some`, await [`tick_after`] and
//! then feed `Message::Tick` back into the queue. No deadline, no timer.
//!
//! The helpers never touch the queue itself; expiry stays a synchronous
//! operation on the owning thread.

use std::time::{Duration, Instant};

use tokio::time;

/// Sleeps until `deadline` has passed.
///
/// Returns immediately when the deadline is already in the past.
pub async fn tick_after(deadline: Instant) {
    time::sleep_until(time::Instant::from_std(deadline)).await;
}

/// Sleeps for `duration`.
///
/// Convenience for hosts that prefer a fixed tick interval over deadline
/// scheduling (e.g. a 100 ms UI tick).
pub async fn tick_in(duration: Duration) {
    time::sleep(duration).await;
}
