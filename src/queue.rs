// SPDX-License-Identifier: MPL-2.0
//! Notification queue with keyed deduplication and timed expiry.
//!
//! The `Queue` is an explicitly owned instance: whichever component drives
//! the UI constructs one and mutates it in response to application events.
//! All operations are total; absent or already-removed targets degrade to
//! no-ops rather than errors.
//!
//! Expiry is deadline-driven: `add_with_timeout` records a removal deadline
//! keyed by the notification's identity, and the host calls [`Queue::tick`]
//! periodically (or sleeps via [`crate::timer`]) to collect due entries.
//! Removing an entry by any other path drops its deadline, so a pending
//! expiry can never remove a different notification than the one it was
//! scheduled for.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::diagnostics::DiagnosticsHandle;
use crate::notification::{Level, Notification, NotificationId};

/// Fixed display duration for notifications added via `add_with_timeout`.
pub const DISPLAY_TIMEOUT: Duration = Duration::from_millis(5000);

/// Target of a clear request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Clear {
    /// Empty the entire queue.
    All,
    /// Remove every notification carrying this key.
    ByKey(String),
    /// Remove the single notification with this identity.
    One(NotificationId),
}

/// Messages for queue state changes, dispatched by the host event loop.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific notification by ID.
    Dismiss(NotificationId),
    /// Clear one, some, or all notifications.
    Clear(Clear),
    /// Tick for checking expiry deadlines.
    Tick,
}

/// Ordered queue of notifications with dedupe-on-insert by key.
#[derive(Debug, Default)]
pub struct Queue {
    /// Entries in insertion order (oldest first).
    entries: Vec<Notification>,
    /// Pending removal deadlines, keyed by notification identity.
    deadlines: HashMap<NotificationId, Instant>,
    /// Optional diagnostics handle for mirroring warnings/errors.
    diagnostics: Option<DiagnosticsHandle>,
}

impl Queue {
    /// Creates a new empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the diagnostics handle.
    ///
    /// Once set, warning- and error-level notifications are mirrored into
    /// the diagnostic log as they are added.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    /// Appends a notification to the end of the queue.
    ///
    /// If the notification carries a key that is already present, the queue
    /// is left unchanged and `false` is returned. Keyless notifications
    /// always append.
    pub fn add(&mut self, notification: Notification) -> bool {
        if let Some(key) = notification.key() {
            if self.contains_key(key) {
                return false;
            }
        }
        self.mirror_to_diagnostics(&notification);
        self.entries.push(notification);
        true
    }

    /// Appends a notification and schedules its removal after
    /// [`DISPLAY_TIMEOUT`].
    ///
    /// Insertion semantics are identical to [`Queue::add`]; no deadline is
    /// recorded when the insert is deduplicated away.
    pub fn add_with_timeout(&mut self, notification: Notification) -> bool {
        self.add_with_deadline(notification, Instant::now() + DISPLAY_TIMEOUT)
    }

    /// Appends a notification with an explicit removal deadline.
    pub fn add_with_deadline(&mut self, notification: Notification, deadline: Instant) -> bool {
        let id = notification.id();
        if self.add(notification) {
            self.deadlines.insert(id, deadline);
            true
        } else {
            false
        }
    }

    /// Appends a keyless info notification.
    pub fn add_info(&mut self, message: impl Into<String>) {
        self.add(Notification::info(message));
    }

    /// Appends a keyless warning notification.
    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.add(Notification::warning(message));
    }

    /// Appends a keyless error notification.
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.add(Notification::error(message));
    }

    /// Appends a keyless success notification.
    pub fn add_success(&mut self, message: impl Into<String>) {
        self.add(Notification::success(message));
    }

    /// Executes a clear request.
    pub fn clear(&mut self, request: Clear) {
        match request {
            Clear::All => self.clear_all(),
            Clear::ByKey(key) => {
                self.remove_by_key(&key);
            }
            Clear::One(id) => {
                self.remove_one(id);
            }
        }
    }

    /// Removes every notification whose key equals `key`.
    ///
    /// Returns the number of entries removed.
    pub fn remove_by_key(&mut self, key: &str) -> usize {
        let before = self.entries.len();
        self.entries.retain(|n| n.key() != Some(key));
        let removed = before - self.entries.len();
        if removed > 0 {
            self.drop_stale_deadlines();
        }
        removed
    }

    /// Removes the notification with the given identity.
    ///
    /// Returns `true` if it was found and removed. Any pending expiry
    /// deadline for it is cancelled, so repeating the call is a no-op.
    pub fn remove_one(&mut self, id: NotificationId) -> bool {
        if let Some(pos) = self.entries.iter().position(|n| n.id() == id) {
            self.entries.remove(pos);
            self.deadlines.remove(&id);
            true
        } else {
            false
        }
    }

    /// Resets the queue to empty, cancelling all pending deadlines.
    pub fn clear_all(&mut self) {
        self.entries.clear();
        self.deadlines.clear();
    }

    /// Returns whether some entry carries the given key.
    ///
    /// Always `false` for an empty key or an empty queue.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        !key.is_empty() && self.entries.iter().any(|n| n.key() == Some(key))
    }

    /// Removes every entry whose deadline has passed.
    ///
    /// Returns the identities of the removed entries. Should be called
    /// periodically by the host while [`Queue::next_deadline`] is `Some`.
    pub fn tick(&mut self) -> Vec<NotificationId> {
        self.tick_at(Instant::now())
    }

    /// Removes every entry whose deadline is at or before `now`.
    pub fn tick_at(&mut self, now: Instant) -> Vec<NotificationId> {
        let due: Vec<NotificationId> = self
            .deadlines
            .iter()
            .filter(|(_, deadline)| **deadline <= now)
            .map(|(id, _)| *id)
            .collect();
        for id in &due {
            self.remove_one(*id);
        }
        due
    }

    /// Returns the earliest pending expiry deadline, if any.
    ///
    /// Hosts use this to gate their tick timer: no deadline, no timer.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.deadlines.values().min().copied()
    }

    /// Handles a queue message.
    pub fn handle_message(&mut self, message: Message) {
        match message {
            Message::Dismiss(id) => {
                self.remove_one(id);
            }
            Message::Clear(request) => self.clear(request),
            Message::Tick => {
                self.tick();
            }
        }
    }

    /// Returns all notifications in insertion order, for rendering.
    #[must_use]
    pub fn notifications(&self) -> &[Notification] {
        &self.entries
    }

    /// Returns the number of notifications in the queue.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the queue is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops deadlines whose entry is no longer in the queue.
    fn drop_stale_deadlines(&mut self) {
        let entries = &self.entries;
        self.deadlines
            .retain(|id, _| entries.iter().any(|n| n.id() == *id));
    }

    fn mirror_to_diagnostics(&self, notification: &Notification) {
        if let Some(handle) = &self.diagnostics {
            match notification.level() {
                Level::Warning => handle.log_warning(notification.message()),
                Level::Error => handle.log_error(notification.message()),
                Level::Info | Level::Success => {}
            }
        }
    }
}
