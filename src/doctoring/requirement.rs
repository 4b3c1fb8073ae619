//! Version requirement resolution.
//!
//! A requirement is a minimum version with an optional exact pin. When a
//! pin is present it is the sole acceptance criterion; otherwise the
//! minimum is an inclusive lower bound with no upper bound.

use semver::Version;

use crate::error::{MedicError, Result};

/// An immutable version policy for one toolchain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionRequirement {
    minimum: Version,
    exact: Option<Version>,
}

impl VersionRequirement {
    /// Build a requirement from configuration strings.
    ///
    /// Fails fast with [`MedicError::InvalidVersion`] if either string is
    /// not valid semver; a bad requirement must never reach evaluation.
    pub fn new(minimum: &str, exact: Option<&str>) -> Result<Self> {
        Ok(Self {
            minimum: parse_version(minimum)?,
            exact: exact.map(parse_version).transpose()?,
        })
    }

    /// Whether a discovered version satisfies this requirement.
    ///
    /// With a pin set, only exact semver equality (pre-release and build
    /// metadata included) passes. Otherwise any version at or above the
    /// minimum passes, under standard semver precedence.
    pub fn satisfied_by(&self, candidate: &Version) -> bool {
        match &self.exact {
            Some(exact) => candidate == exact,
            None => candidate >= &self.minimum,
        }
    }

    /// Version shown in human-facing titles: the pin if set, else the
    /// minimum. Has no effect on matching.
    pub fn display_version(&self) -> &Version {
        self.exact.as_ref().unwrap_or(&self.minimum)
    }
}

fn parse_version(value: &str) -> Result<Version> {
    Version::parse(value).map_err(|source| MedicError::InvalidVersion {
        value: value.to_string(),
        source,
    })
}
