// SPDX-License-Identifier: MPL-2.0
//! Collector aggregating diagnostic events from the notification queue.
//!
//! The queue holds a [`DiagnosticsHandle`] and sends events through a
//! bounded channel; the owning application drains them into the collector's
//! ring buffer whenever convenient (e.g. when opening a diagnostics screen).

use crossbeam_channel::{bounded, Receiver, Sender};

use super::buffer::CircularBuffer;
use super::events::{DiagnosticEvent, DiagnosticEventKind};

/// Capacity of the event channel between handle and collector.
///
/// Sends are non-blocking; events beyond this backlog are dropped rather
/// than stalling the UI thread.
pub const EVENT_CHANNEL_CAPACITY: usize = 256;

/// Default number of events retained in the collector's ring buffer.
const DEFAULT_BUFFER_CAPACITY: usize = 1000;

/// Handle for sending diagnostic events to the collector.
///
/// Cheap to clone and safe to hand to any component; sending never blocks.
#[derive(Debug, Clone)]
pub struct DiagnosticsHandle {
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsHandle {
    /// Records a warning message.
    ///
    /// Non-blocking; the event is dropped if the channel is full.
    pub fn log_warning(&self, message: impl Into<String>) {
        let event = DiagnosticEvent::new(DiagnosticEventKind::Warning {
            message: message.into(),
        });
        let _ = self.event_tx.try_send(event);
    }

    /// Records an error message.
    ///
    /// Non-blocking; the event is dropped if the channel is full.
    pub fn log_error(&self, message: impl Into<String>) {
        let event = DiagnosticEvent::new(DiagnosticEventKind::Error {
            message: message.into(),
        });
        let _ = self.event_tx.try_send(event);
    }
}

/// Receives diagnostic events and stores them in a bounded ring buffer.
#[derive(Debug)]
pub struct DiagnosticsCollector {
    event_rx: Receiver<DiagnosticEvent>,
    handle: DiagnosticsHandle,
    buffer: CircularBuffer<DiagnosticEvent>,
}

impl DiagnosticsCollector {
    /// Creates a collector with the default buffer capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_BUFFER_CAPACITY)
    }

    /// Creates a collector retaining at most `capacity` events.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let (event_tx, event_rx) = bounded(EVENT_CHANNEL_CAPACITY);
        Self {
            event_rx,
            handle: DiagnosticsHandle { event_tx },
            buffer: CircularBuffer::new(capacity),
        }
    }

    /// Returns a handle for sending events to this collector.
    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        self.handle.clone()
    }

    /// Moves all pending events from the channel into the buffer.
    ///
    /// Returns the number of events drained.
    pub fn drain(&mut self) -> usize {
        let mut drained = 0;
        while let Ok(event) = self.event_rx.try_recv() {
            self.buffer.push(event);
            drained += 1;
        }
        drained
    }

    /// Iterates over collected events from oldest to newest.
    pub fn events(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    /// Returns the number of collected events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns true if no events have been collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Discards all collected events.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handle_events_reach_collector_after_drain() {
        let mut collector = DiagnosticsCollector::new();
        let handle = collector.handle();

        handle.log_warning("spinning up");
        handle.log_error("spun down");
        assert!(collector.is_empty());

        assert_eq!(collector.drain(), 2);
        let kinds: Vec<_> = collector.events().map(|e| e.kind.clone()).collect();
        assert_eq!(
            kinds,
            vec![
                DiagnosticEventKind::Warning {
                    message: "spinning up".to_string()
                },
                DiagnosticEventKind::Error {
                    message: "spun down".to_string()
                },
            ]
        );
    }

    #[test]
    fn drain_on_empty_channel_returns_zero() {
        let mut collector = DiagnosticsCollector::new();
        assert_eq!(collector.drain(), 0);
    }

    #[test]
    fn buffer_capacity_bounds_retained_events() {
        let mut collector = DiagnosticsCollector::with_capacity(2);
        let handle = collector.handle();

        handle.log_error("first");
        handle.log_error("second");
        handle.log_error("third");
        collector.drain();

        assert_eq!(collector.len(), 2);
        let messages: Vec<_> = collector
            .events()
            .map(|e| match &e.kind {
                DiagnosticEventKind::Warning { message }
                | DiagnosticEventKind::Error { message } => message.clone(),
            })
            .collect();
        assert_eq!(messages, vec!["second", "third"]);
    }

    #[test]
    fn full_channel_drops_events_without_blocking() {
        let mut collector = DiagnosticsCollector::new();
        let handle = collector.handle();

        for n in 0..EVENT_CHANNEL_CAPACITY + 10 {
            handle.log_warning(format!("event {n}"));
        }
        assert_eq!(collector.drain(), EVENT_CHANNEL_CAPACITY);
    }

    #[test]
    fn clear_discards_collected_events() {
        let mut collector = DiagnosticsCollector::new();
        collector.handle().log_error("boom");
        collector.drain();
        assert_eq!(collector.len(), 1);

        collector.clear();
        assert!(collector.is_empty());
    }
}
