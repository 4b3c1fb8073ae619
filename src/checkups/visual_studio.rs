//! Visual Studio toolchain checkup.
//!
//! Discovers installed Visual Studio instances through `vswhere.exe`,
//! classifies each against a [`VersionRequirement`], and repairs a missing
//! MSBuild workload-resolver sentinel on compatible installations.
//!
//! Discovery is tolerant by design: `vswhere` output from real machines
//! routinely contains partial entries (interrupted installs, preview
//! channels without a catalog), so individual malformed entries are
//! skipped while an unusable document as a whole is a hard failure.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use semver::Version;

use crate::doctoring::report::StatusReporter;
use crate::doctoring::{Checkup, Diagnosis, Platform, Status, VersionRequirement};
use crate::error::{MedicError, Result};
use crate::shell;

/// Fixed vswhere invocation: every instance carrying the MSBuild component,
/// prereleases included, as JSON.
const VSWHERE_ARGS: &[&str] = &[
    "-all",
    "-requires",
    "Microsoft.Component.MSBuild",
    "-format",
    "json",
    "-prerelease",
];

/// vswhere.exe location relative to a Program Files root.
const VSWHERE_RELATIVE: &[&str] = &["Microsoft Visual Studio", "Installer", "vswhere.exe"];

/// Environment variables naming candidate Program Files roots. The 32-bit
/// root comes first; the installer places vswhere there.
const PROGRAM_FILES_VARS: &[&str] = &["ProgramFiles(x86)", "ProgramFiles"];

/// Marker consumed by the MSBuild SDK resolver, relative to an
/// installation root. Its mere presence enables workload resolution.
const SENTINEL_RELATIVE: &[&str] = &[
    "MSBuild",
    "Current",
    "Bin",
    "SdkResolvers",
    "Microsoft.DotNet.MSBuildSdkResolver",
    "EnableWorkloadResolver.sentinel",
];

/// One discovered Visual Studio installation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstalledInstance {
    pub version: Version,
    pub install_path: String,
}

/// Finds the discovery tool and captures its raw output.
///
/// `Ok(None)` means the tool is not installed at all, which is a legitimate
/// outcome, not an error.
pub trait InstallationLocator {
    fn locate(&self) -> Result<Option<String>>;
}

/// Locates Visual Studio instances by running `vswhere.exe` from its
/// well-known install location.
#[derive(Debug, Default)]
pub struct VswhereLocator;

impl VswhereLocator {
    /// Candidate vswhere paths in priority order, derived from the host's
    /// Program Files roots. Roots whose variable is unset are dropped.
    fn candidate_paths() -> Vec<PathBuf> {
        PROGRAM_FILES_VARS
            .iter()
            .filter_map(env::var_os)
            .map(|root| {
                let mut path = PathBuf::from(root);
                for part in VSWHERE_RELATIVE {
                    path.push(part);
                }
                path
            })
            .collect()
    }
}

impl InstallationLocator for VswhereLocator {
    fn locate(&self) -> Result<Option<String>> {
        let Some(vswhere) = Self::candidate_paths().into_iter().find(|p| p.is_file()) else {
            tracing::debug!("vswhere.exe not found in any Program Files root");
            return Ok(None);
        };

        tracing::debug!(path = %vswhere.display(), "running vswhere");
        // Non-zero exit is tolerated; the parser is the authority on
        // whether the output is usable.
        let output = shell::run_capture(&vswhere, VSWHERE_ARGS)?;
        Ok(Some(output.stdout))
    }
}

/// Parse vswhere JSON output into installation instances.
///
/// Per-element tolerance: an entry is silently skipped when
/// `catalog.productSemanticVersion` is absent, fails semver parsing, or
/// `installationPath` is absent. Surviving entries keep their relative
/// order. A root that is not a JSON array fails hard with
/// [`MedicError::MalformedOutput`] and yields no partial result.
pub fn parse_installations(raw: &str) -> Result<Vec<InstalledInstance>> {
    let document: serde_json::Value =
        serde_json::from_str(raw).map_err(|e| MedicError::MalformedOutput {
            message: e.to_string(),
        })?;

    let Some(entries) = document.as_array() else {
        return Err(MedicError::MalformedOutput {
            message: "expected a JSON array of installations".to_string(),
        });
    };

    let mut instances = Vec::new();
    for entry in entries {
        let Some(raw_version) = entry
            .pointer("/catalog/productSemanticVersion")
            .and_then(|v| v.as_str())
        else {
            continue;
        };
        let Ok(version) = Version::parse(raw_version) else {
            tracing::debug!(version = raw_version, "skipping unparseable version");
            continue;
        };
        let Some(install_path) = entry.get("installationPath").and_then(|v| v.as_str()) else {
            continue;
        };

        instances.push(InstalledInstance {
            version,
            install_path: install_path.to_string(),
        });
    }

    Ok(instances)
}

/// Create the workload-resolver sentinel when the installation needs it.
///
/// The file is created only when its parent already exists as a directory
/// and the file itself is absent; otherwise this is a silent no-op. A
/// failed create is explicitly ignored rather than caught wholesale, and
/// never affects the checkup's verdict.
fn ensure_workload_resolver_sentinel(install_root: &Path, reporter: &mut dyn StatusReporter) {
    let mut sentinel = install_root.to_path_buf();
    for part in SENTINEL_RELATIVE {
        sentinel.push(part);
    }

    let parent_is_dir = sentinel.parent().is_some_and(|p| p.is_dir());
    if !parent_is_dir || sentinel.exists() {
        return;
    }

    if fs::File::create(&sentinel).is_ok() {
        reporter.report_status(
            "Created EnableWorkloadResolver.sentinel for IDE support",
            Some(Status::Ok),
        );
    }
}

/// Checkup verifying a compatible Visual Studio installation is present.
pub struct VisualStudioCheckup {
    requirement: VersionRequirement,
    locator: Box<dyn InstallationLocator>,
}

impl std::fmt::Debug for VisualStudioCheckup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VisualStudioCheckup")
            .field("requirement", &self.requirement)
            .finish_non_exhaustive()
    }
}


impl VisualStudioCheckup {
    /// Checkup with the standard vswhere locator.
    ///
    /// Fails fast if either version string is not valid semver.
    pub fn new(minimum: &str, exact: Option<&str>) -> Result<Self> {
        Self::with_locator(minimum, exact, Box::new(VswhereLocator))
    }

    /// Checkup wired to a custom locator. Exposed for tests and callers
    /// that resolve the discovery tool themselves.
    pub fn with_locator(
        minimum: &str,
        exact: Option<&str>,
        locator: Box<dyn InstallationLocator>,
    ) -> Result<Self> {
        Ok(Self {
            requirement: VersionRequirement::new(minimum, exact)?,
            locator,
        })
    }

    /// Locate and parse installations. A missing tool yields an empty
    /// list; unusable tool output propagates as an error.
    fn discover(&self) -> Result<Vec<InstalledInstance>> {
        match self.locator.locate()? {
            Some(raw) => parse_installations(&raw),
            None => Ok(Vec::new()),
        }
    }
}

impl Checkup for VisualStudioCheckup {
    fn id(&self) -> &str {
        "visualstudio"
    }

    fn title(&self) -> String {
        format!("Visual Studio {}", self.requirement.display_version())
    }

    fn is_platform_supported(&self, platform: Platform) -> bool {
        platform == Platform::Windows
    }

    fn examine(&self, reporter: &mut dyn StatusReporter) -> Result<Diagnosis> {
        let instances = self.discover()?;

        let mut any_compatible = false;
        for instance in &instances {
            if self.requirement.satisfied_by(&instance.version) {
                any_compatible = true;
                reporter.report_status(
                    &format!("{} - {}", instance.version, instance.install_path),
                    Some(Status::Ok),
                );
                ensure_workload_resolver_sentinel(Path::new(&instance.install_path), reporter);
            } else {
                reporter.report_status(&instance.version.to_string(), None);
            }
        }

        // A toolchain that cannot be found is a failed check, not a skip.
        if any_compatible {
            Ok(Diagnosis::ok(self))
        } else {
            Ok(Diagnosis::error(self))
        }
    }
}
