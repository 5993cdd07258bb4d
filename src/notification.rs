// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` record and `Level` enum used
//! throughout the queue. A notification is immutable once created; all
//! lifecycle state (ordering, expiry deadlines) lives in the queue itself.

use std::sync::atomic::{AtomicU64, Ordering};

/// Unique identifier for a notification.
///
/// Deferred removal and targeted dismissal are keyed by this identity, so a
/// stale removal for an entry that already left the queue is a harmless no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Severity level of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Level {
    /// Informational message.
    #[default]
    Info,
    /// Warning that doesn't block operation.
    Warning,
    /// Error requiring attention.
    Error,
    /// Operation completed successfully.
    Success,
}

/// A single transient message to be shown to the user.
///
/// The optional `key` identifies the logical event behind the message
/// (e.g. `"conn-lost"`); the queue keeps at most one entry per key at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    id: NotificationId,
    level: Level,
    message: String,
    key: Option<String>,
}

impl Notification {
    /// Creates a new keyless notification with the given level and message.
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            level,
            message: message.into(),
            key: None,
        }
    }

    /// Creates an info notification.
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Level::Info, message)
    }

    /// Creates a warning notification.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Level::Warning, message)
    }

    /// Creates an error notification.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    /// Creates a success notification.
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Level::Success, message)
    }

    /// Sets the dedupe key for this notification.
    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Returns the notification's unique ID.
    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    /// Returns the severity level.
    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }

    /// Returns the message text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the dedupe key, if any.
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_ids_are_unique() {
        let n1 = Notification::info("test");
        let n2 = Notification::info("test");
        assert_ne!(n1.id(), n2.id());
    }

    #[test]
    fn constructors_set_correct_level() {
        assert_eq!(Notification::info("").level(), Level::Info);
        assert_eq!(Notification::warning("").level(), Level::Warning);
        assert_eq!(Notification::error("").level(), Level::Error);
        assert_eq!(Notification::success("").level(), Level::Success);
    }

    #[test]
    fn constructors_produce_keyless_notifications() {
        assert_eq!(Notification::info("hello").key(), None);
        assert_eq!(Notification::error("boom").key(), None);
    }

    #[test]
    fn with_key_sets_dedupe_key() {
        let n = Notification::warning("connection lost").with_key("conn-lost");
        assert_eq!(n.key(), Some("conn-lost"));
        assert_eq!(n.message(), "connection lost");
    }

    #[test]
    fn clones_compare_equal_but_fresh_notifications_do_not() {
        let n = Notification::info("same text");
        let clone = n.clone();
        let rebuilt = Notification::info("same text");

        assert_eq!(n, clone);
        assert_ne!(n, rebuilt); // identity differs
    }
}
