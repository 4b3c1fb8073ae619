//! Medic - developer machine health checks.
//!
//! Medic inspects a developer machine for correctly configured IDE and build
//! toolchains. Each probe is a [`doctoring::Checkup`] with a stable identity
//! and a platform-applicability predicate; examining a checkup produces a
//! [`doctoring::Diagnosis`]. The [`doctoring::Doctor`] runs every checkup
//! applicable to the current platform and aggregates the results into a
//! [`doctoring::RunReport`].
//!
//! # Modules
//!
//! - [`checkups`] - Built-in checkups (currently the Visual Studio probe)
//! - [`cli`] - Command-line interface and argument parsing
//! - [`doctoring`] - Checkup contract, version requirements, and reporting
//! - [`error`] - Error types and result aliases
//! - [`shell`] - Process execution
//! - [`ui`] - Terminal output and theming
//!
//! # Example
//!
//! ```
//! use medic::doctoring::VersionRequirement;
//! use semver::Version;
//!
//! let requirement = VersionRequirement::new("16.9.0", None).unwrap();
//! assert!(requirement.satisfied_by(&Version::parse("17.0.0").unwrap()));
//! assert!(!requirement.satisfied_by(&Version::parse("16.8.9").unwrap()));
//! ```

pub mod checkups;
pub mod cli;
pub mod doctoring;
pub mod error;
pub mod shell;
pub mod ui;

pub use error::{MedicError, Result};
