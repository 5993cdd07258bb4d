// SPDX-License-Identifier: MPL-2.0
//! In-process diagnostic log for warning and error notifications.
//!
//! Warning- and error-level notifications carry information worth keeping
//! after the toast disappears. This module collects them into a
//! memory-bounded ring buffer and can export the log as a JSON report.
//!
//! # Architecture
//!
//! - [`DiagnosticsHandle`]: cheap-to-clone sender used by the queue
//! - [`DiagnosticsCollector`]: drains the channel into a [`CircularBuffer`]
//! - [`DiagnosticEvent`]: a timestamped warning or error entry
//! - [`export`]: JSON report written atomically to disk

mod buffer;
mod collector;
mod events;
pub mod export;

pub use buffer::CircularBuffer;
pub use collector::{DiagnosticsCollector, DiagnosticsHandle, EVENT_CHANNEL_CAPACITY};
pub use events::{DiagnosticEvent, DiagnosticEventKind};
