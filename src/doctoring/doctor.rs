//! Doctor orchestration.
//!
//! The doctor owns sequencing: it walks the registered checkups in order,
//! skips the ones that do not apply to the current platform, and converts
//! any failure escaping `examine` into an error diagnosis so one broken
//! probe cannot abort the run.

use super::report::{CheckupOutcome, RunReport, StatusReporter};
use super::{Checkup, CheckupIdentity, Diagnosis, Platform, Status};

/// Runs checkups and aggregates their diagnoses.
pub struct Doctor {
    checkups: Vec<Box<dyn Checkup>>,
    platform: Platform,
}

impl Doctor {
    /// Doctor for the current platform.
    pub fn new(checkups: Vec<Box<dyn Checkup>>) -> Self {
        Self::with_platform(checkups, Platform::current())
    }

    /// Doctor pinned to a specific platform. Exposed for tests.
    pub fn with_platform(checkups: Vec<Box<dyn Checkup>>, platform: Platform) -> Self {
        Self { checkups, platform }
    }

    /// Examine every applicable checkup, in registration order.
    ///
    /// Checkups that do not support the platform are reported as
    /// informational skips and excluded from the verdict.
    pub fn run(&self, reporter: &mut dyn StatusReporter) -> RunReport {
        let mut outcomes = Vec::new();

        for checkup in &self.checkups {
            let identity = CheckupIdentity::of(checkup.as_ref());

            if !checkup.is_platform_supported(self.platform) {
                tracing::debug!(id = %identity.id, "checkup not applicable, skipping");
                reporter.report_status(
                    &format!("{} (skipped on {})", identity.title, self.platform),
                    None,
                );
                continue;
            }

            reporter.begin_checkup(&identity);
            let diagnosis = match checkup.examine(reporter) {
                Ok(diagnosis) => diagnosis,
                Err(e) => {
                    tracing::debug!(id = %identity.id, error = %e, "checkup failed");
                    reporter.report_status(&e.to_string(), Some(Status::Error));
                    Diagnosis {
                        status: Status::Error,
                        subject: identity,
                    }
                }
            };
            outcomes.push(CheckupOutcome::from(diagnosis));
        }

        RunReport::new(outcomes)
    }
}
