//! Process execution.
//!
//! Checkups run external discovery tools through [`run_capture`], which
//! owns spawn-and-capture semantics. Exit codes are surfaced rather than
//! mapped to errors: a discovery tool may exit non-zero and still produce
//! usable output, and the caller's parser is the authority on validity.

use std::path::Path;
use std::process::{Command, Stdio};

use crate::error::{MedicError, Result};

/// Captured output of a finished process.
#[derive(Debug, Clone)]
pub struct ProcessOutput {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Whether the process exited with code 0.
    pub success: bool,
}

/// Run a program synchronously to completion and capture its output.
///
/// Only a failure to spawn the process maps to [`MedicError::CommandFailed`].
/// No timeout is imposed here; callers wanting bounded latency must wrap
/// this call.
pub fn run_capture(program: &Path, args: &[&str]) -> Result<ProcessOutput> {
    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .output()
        .map_err(|_| MedicError::CommandFailed {
            command: program.display().to_string(),
        })?;

    Ok(ProcessOutput {
        exit_code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        success: output.status.success(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_program_is_command_failed() {
        let err = run_capture(Path::new("/nonexistent/medic-test-binary"), &[]).unwrap_err();
        assert!(matches!(err, MedicError::CommandFailed { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn captures_stdout() {
        let output = run_capture(Path::new("/bin/sh"), &["-c", "echo hello"]).unwrap();
        assert!(output.success);
        assert_eq!(output.exit_code, Some(0));
        assert_eq!(output.stdout.trim(), "hello");
    }

    #[cfg(unix)]
    #[test]
    fn nonzero_exit_is_not_an_error() {
        let output = run_capture(Path::new("/bin/sh"), &["-c", "echo partial; exit 3"]).unwrap();
        assert!(!output.success);
        assert_eq!(output.exit_code, Some(3));
        // Output captured regardless of exit code.
        assert_eq!(output.stdout.trim(), "partial");
    }
}
