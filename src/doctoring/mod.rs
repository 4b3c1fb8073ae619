//! Checkup contract and diagnosis types.
//!
//! A checkup is one independent diagnostic probe: it has a stable id, a
//! human-facing title, a platform-applicability predicate, and an `examine`
//! operation that emits status lines through a [`StatusReporter`] and
//! returns a [`Diagnosis`].
//!
//! # Architecture
//!
//! - [`doctor`] - Runs registered checkups and aggregates a run report
//! - [`report`] - Status reporting sink and machine-readable run reports
//! - [`requirement`] - Version requirement resolution

pub mod doctor;
pub mod report;
pub mod requirement;

pub use doctor::Doctor;
pub use report::{CheckupOutcome, RecordingReporter, RunReport, StatusReporter};
pub use requirement::VersionRequirement;

use serde::Serialize;
use std::fmt;

use crate::error::Result;

/// Platform a checkup may apply to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    MacOs,
    Linux,
}

impl Platform {
    /// The platform medic is currently running on.
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            Platform::Windows
        } else if cfg!(target_os = "macos") {
            Platform::MacOs
        } else {
            Platform::Linux
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Windows => write!(f, "Windows"),
            Platform::MacOs => write!(f, "macOS"),
            Platform::Linux => write!(f, "Linux"),
        }
    }
}

/// Severity of a status line or an aggregate diagnosis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Ok,
    Warning,
    Error,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Ok => write!(f, "ok"),
            Status::Warning => write!(f, "warning"),
            Status::Error => write!(f, "error"),
        }
    }
}

/// Stable identity of a checkup, used for reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckupIdentity {
    pub id: String,
    pub title: String,
}

impl CheckupIdentity {
    /// Capture the identity of a checkup at examination time.
    pub fn of(checkup: &dyn Checkup) -> Self {
        Self {
            id: checkup.id().to_string(),
            title: checkup.title(),
        }
    }
}

/// The verdict produced by one checkup run. Immutable once produced.
#[derive(Debug, Clone)]
pub struct Diagnosis {
    pub status: Status,
    pub subject: CheckupIdentity,
}

impl Diagnosis {
    /// A passing diagnosis for the given checkup.
    pub fn ok(checkup: &dyn Checkup) -> Self {
        Self {
            status: Status::Ok,
            subject: CheckupIdentity::of(checkup),
        }
    }

    /// A failing diagnosis for the given checkup.
    pub fn error(checkup: &dyn Checkup) -> Self {
        Self {
            status: Status::Error,
            subject: CheckupIdentity::of(checkup),
        }
    }

    /// Whether this diagnosis fails the overall run.
    pub fn is_error(&self) -> bool {
        self.status == Status::Error
    }
}

/// One diagnostic probe.
///
/// Implementations are independent; checkups never call each other. The
/// [`Doctor`] owns sequencing and must not examine a checkup on a platform
/// it does not support.
pub trait Checkup {
    /// Stable identifier, e.g. `"visualstudio"`.
    fn id(&self) -> &str;

    /// Human-facing title. Derived at read time, so it may reflect
    /// configuration such as a pinned version.
    fn title(&self) -> String;

    /// Whether this checkup applies on the given platform.
    fn is_platform_supported(&self, platform: Platform) -> bool;

    /// Run the probe, emitting one status line per finding.
    ///
    /// Errors propagate to the doctor, which converts them into an
    /// error diagnosis; checkups do not retry.
    fn examine(&self, reporter: &mut dyn StatusReporter) -> Result<Diagnosis>;
}
