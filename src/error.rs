//! Error types for medic operations.
//!
//! This module defines [`MedicError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `MedicError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `MedicError::Other`) for unexpected errors
//! - Absence of a toolchain is never an error; it surfaces as a failed
//!   diagnosis, not a `MedicError`

use thiserror::Error;

/// Core error type for medic operations.
#[derive(Debug, Error)]
pub enum MedicError {
    /// A requirement version string is not valid semver.
    #[error("Invalid version requirement '{value}': {source}")]
    InvalidVersion {
        value: String,
        #[source]
        source: semver::Error,
    },

    /// The discovery tool ran but its output is unusable as a whole.
    #[error("Malformed discovery output: {message}")]
    MalformedOutput { message: String },

    /// A process could not be spawned.
    #[error("Failed to run command: {command}")]
    CommandFailed { command: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for medic operations.
pub type Result<T> = std::result::Result<T, MedicError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_version_displays_value() {
        let source = semver::Version::parse("not-a-version").unwrap_err();
        let err = MedicError::InvalidVersion {
            value: "not-a-version".into(),
            source,
        };
        assert!(err.to_string().contains("not-a-version"));
    }

    #[test]
    fn malformed_output_displays_message() {
        let err = MedicError::MalformedOutput {
            message: "expected a JSON array".into(),
        };
        assert!(err.to_string().contains("expected a JSON array"));
    }

    #[test]
    fn command_failed_displays_command() {
        let err = MedicError::CommandFailed {
            command: "vswhere.exe".into(),
        };
        assert!(err.to_string().contains("vswhere.exe"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: MedicError = io_err.into();
        assert!(matches!(err, MedicError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(MedicError::MalformedOutput {
                message: "test".into(),
            })
        }
        assert!(returns_error().is_err());
    }
}
