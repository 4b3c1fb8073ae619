//! Status reporting sink and machine-readable run reports.
//!
//! Checkups emit status lines through a [`StatusReporter`]; how those lines
//! are displayed is the sink's concern. The doctor aggregates diagnoses into
//! a [`RunReport`] for summary output and `--json` mode.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{CheckupIdentity, Diagnosis, Status};
use crate::error::Result;

/// Sink for status lines emitted during a checkup run.
///
/// A `None` status marks an informational line that does not affect
/// pass/fail.
pub trait StatusReporter {
    /// Called once before a checkup's status lines, with its identity.
    fn begin_checkup(&mut self, _identity: &CheckupIdentity) {}

    /// Surface one status line.
    fn report_status(&mut self, message: &str, status: Option<Status>);
}

/// Reporter that records every line it receives. Used by tests and by
/// `--json` mode, where per-line output is suppressed.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    lines: Vec<(String, Option<Status>)>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded `(message, status)` pairs, in emission order.
    pub fn lines(&self) -> &[(String, Option<Status>)] {
        &self.lines
    }
}

impl StatusReporter for RecordingReporter {
    fn report_status(&mut self, message: &str, status: Option<Status>) {
        self.lines.push((message.to_string(), status));
    }
}

/// Outcome of one checkup within a run.
#[derive(Debug, Clone, Serialize)]
pub struct CheckupOutcome {
    pub id: String,
    pub title: String,
    pub status: Status,
}

impl From<Diagnosis> for CheckupOutcome {
    fn from(diagnosis: Diagnosis) -> Self {
        Self {
            id: diagnosis.subject.id,
            title: diagnosis.subject.title,
            status: diagnosis.status,
        }
    }
}

/// Aggregate result of one doctor run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// When this run completed.
    pub generated_at: DateTime<Utc>,
    /// One outcome per examined checkup; skipped checkups are excluded.
    pub checkups: Vec<CheckupOutcome>,
    /// Whether no examined checkup diagnosed an error.
    pub ok: bool,
}

impl RunReport {
    /// Build a report from examined outcomes, timestamped now.
    pub fn new(checkups: Vec<CheckupOutcome>) -> Self {
        let ok = checkups.iter().all(|c| c.status != Status::Error);
        Self {
            generated_at: Utc::now(),
            checkups,
            ok,
        }
    }

    /// Number of checkups that diagnosed an error.
    pub fn error_count(&self) -> usize {
        self.checkups
            .iter()
            .filter(|c| c.status == Status::Error)
            .count()
    }

    /// Pretty-printed JSON rendering for `--json` output.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self).map_err(anyhow::Error::from)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(id: &str, status: Status) -> CheckupOutcome {
        CheckupOutcome {
            id: id.to_string(),
            title: id.to_string(),
            status,
        }
    }

    #[test]
    fn recording_reporter_preserves_order() {
        let mut reporter = RecordingReporter::new();
        reporter.report_status("first", Some(Status::Ok));
        reporter.report_status("second", None);

        let lines = reporter.lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], ("first".to_string(), Some(Status::Ok)));
        assert_eq!(lines[1], ("second".to_string(), None));
    }

    #[test]
    fn empty_run_is_ok() {
        let report = RunReport::new(vec![]);
        assert!(report.ok);
        assert_eq!(report.error_count(), 0);
    }

    #[test]
    fn run_with_only_passing_checkups_is_ok() {
        let report = RunReport::new(vec![outcome("a", Status::Ok), outcome("b", Status::Warning)]);
        assert!(report.ok);
    }

    #[test]
    fn run_with_any_error_is_not_ok() {
        let report = RunReport::new(vec![outcome("a", Status::Ok), outcome("b", Status::Error)]);
        assert!(!report.ok);
        assert_eq!(report.error_count(), 1);
    }

    #[test]
    fn report_serializes_expected_fields() {
        let report = RunReport::new(vec![outcome("visualstudio", Status::Ok)]);
        let json = report.to_json().unwrap();
        assert!(json.contains("generated_at"));
        assert!(json.contains("\"visualstudio\""));
        assert!(json.contains("\"ok\": true"));
    }
}
