//! End-to-end scenarios for the Visual Studio checkup, driven through the
//! library API with stubbed locators.

use medic::checkups::visual_studio::{InstallationLocator, VisualStudioCheckup};
use medic::doctoring::{Checkup, Doctor, Platform, RecordingReporter, Status};
use medic::error::{MedicError, Result};

struct StaticLocator(Option<String>);

impl InstallationLocator for StaticLocator {
    fn locate(&self) -> Result<Option<String>> {
        Ok(self.0.clone())
    }
}

fn entry(version: &str, path: &str) -> String {
    format!(
        r#"{{"installationPath":"{path}","catalog":{{"productSemanticVersion":"{version}"}}}}"#
    )
}

fn checkup(minimum: &str, exact: Option<&str>, raw: Option<&str>) -> VisualStudioCheckup {
    VisualStudioCheckup::with_locator(
        minimum,
        exact,
        Box::new(StaticLocator(raw.map(str::to_string))),
    )
    .unwrap()
}

#[test]
fn compatible_instance_passes() {
    // Minimum 16.9.0, one instance at exactly 16.9.0.
    let raw = format!("[{}]", entry("16.9.0", "/vs"));
    let checkup = checkup("16.9.0", None, Some(&raw));

    let mut reporter = RecordingReporter::new();
    let diagnosis = checkup.examine(&mut reporter).unwrap();

    assert_eq!(diagnosis.status, Status::Ok);
    assert_eq!(diagnosis.subject.id, "visualstudio");
    assert_eq!(
        reporter.lines(),
        &[("16.9.0 - /vs".to_string(), Some(Status::Ok))]
    );
}

#[test]
fn outdated_instance_fails_with_informational_line() {
    let raw = format!("[{}]", entry("16.8.0", "/vs"));
    let checkup = checkup("16.9.0", None, Some(&raw));

    let mut reporter = RecordingReporter::new();
    let diagnosis = checkup.examine(&mut reporter).unwrap();

    assert_eq!(diagnosis.status, Status::Error);
    assert_eq!(reporter.lines(), &[("16.8.0".to_string(), None)]);
}

#[test]
fn pinned_version_accepts_only_the_pin() {
    let raw = format!("[{},{}]", entry("16.9.0", "/a"), entry("17.0.0", "/b"));
    let checkup = checkup("16.9.0", Some("17.0.0"), Some(&raw));

    let mut reporter = RecordingReporter::new();
    let diagnosis = checkup.examine(&mut reporter).unwrap();

    assert_eq!(diagnosis.status, Status::Ok);
    assert_eq!(reporter.lines().len(), 2);
    assert_eq!(reporter.lines()[0], ("16.9.0".to_string(), None));
    assert_eq!(
        reporter.lines()[1],
        ("17.0.0 - /b".to_string(), Some(Status::Ok))
    );
}

#[test]
fn missing_tool_fails_without_crashing() {
    let checkup = checkup("16.9.0", None, None);

    let mut reporter = RecordingReporter::new();
    let diagnosis = checkup.examine(&mut reporter).unwrap();

    assert_eq!(diagnosis.status, Status::Error);
    assert!(reporter.lines().is_empty());
}

#[test]
fn empty_discovery_fails() {
    let checkup = checkup("16.9.0", None, Some("[]"));

    let mut reporter = RecordingReporter::new();
    let diagnosis = checkup.examine(&mut reporter).unwrap();

    assert_eq!(diagnosis.status, Status::Error);
}

#[test]
fn unusable_tool_output_propagates() {
    let checkup = checkup("16.9.0", None, Some("Visual Studio Locator usage:"));

    let mut reporter = RecordingReporter::new();
    let err = checkup.examine(&mut reporter).unwrap_err();

    assert!(matches!(err, MedicError::MalformedOutput { .. }));
}

#[test]
fn doctor_converts_unusable_output_into_error_diagnosis() {
    let checkup = checkup("16.9.0", None, Some("not json"));
    let doctor = Doctor::with_platform(vec![Box::new(checkup)], Platform::Windows);

    let mut reporter = RecordingReporter::new();
    let report = doctor.run(&mut reporter);

    assert!(!report.ok);
    assert_eq!(report.checkups.len(), 1);
    assert_eq!(report.checkups[0].status, Status::Error);
}

#[test]
fn doctor_skips_checkup_off_windows() {
    let checkup = checkup("16.9.0", None, Some("[]"));
    let doctor = Doctor::with_platform(vec![Box::new(checkup)], Platform::Linux);

    let mut reporter = RecordingReporter::new();
    let report = doctor.run(&mut reporter);

    // Not applicable: excluded from the verdict entirely.
    assert!(report.ok);
    assert!(report.checkups.is_empty());
}

#[test]
fn partial_entries_are_dropped_but_run_still_classifies() {
    let raw = format!(
        r#"[{{"installationPath":"/broken"}},{},{{"catalog":{{}}}}]"#,
        entry("17.2.0", "/vs")
    );
    let checkup = checkup("16.9.0", None, Some(&raw));

    let mut reporter = RecordingReporter::new();
    let diagnosis = checkup.examine(&mut reporter).unwrap();

    assert_eq!(diagnosis.status, Status::Ok);
    assert_eq!(reporter.lines().len(), 1);
}
