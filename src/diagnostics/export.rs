// SPDX-License-Identifier: MPL-2.0
//! Export of the diagnostic log as a JSON report.

use std::fs;
use std::path::Path;

use chrono::Local;
use serde::Serialize;

use super::events::{DiagnosticEvent, DiagnosticEventKind};
use crate::error::Result;

/// A serializable snapshot of the diagnostic log.
#[derive(Debug, Serialize)]
pub struct DiagnosticReport {
    /// Wall-clock time the report was captured, RFC 3339.
    pub captured_at: String,
    /// Collected events from oldest to newest.
    pub events: Vec<DiagnosticEventKind>,
}

impl DiagnosticReport {
    /// Builds a report from the collected events.
    pub fn from_events<'a>(events: impl Iterator<Item = &'a DiagnosticEvent>) -> Self {
        Self {
            captured_at: Local::now().to_rfc3339(),
            events: events.map(|event| event.kind.clone()).collect(),
        }
    }
}

/// Generates a timestamped default filename for a report.
#[must_use]
pub fn default_filename() -> String {
    format!(
        "toast-diagnostics-{}.json",
        Local::now().format("%Y%m%d-%H%M%S")
    )
}

/// Writes a report to `path` as pretty-printed JSON.
///
/// The write is atomic: content goes to a sibling temp file first and is
/// renamed into place, so a crash mid-write never leaves a truncated report.
///
/// # Errors
///
/// Returns an error if serialization or any file operation fails.
pub fn write_report(report: &DiagnosticReport, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    write_atomic(path, &json)?;
    Ok(())
}

fn write_atomic(path: &Path, contents: &str) -> std::io::Result<()> {
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, contents)?;
    fs::rename(&tmp, path)?;
    Ok(())
}
