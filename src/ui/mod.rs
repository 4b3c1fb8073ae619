//! Terminal output and theming.
//!
//! The [`TerminalReporter`] is the interactive sink for checkup status
//! lines; it renders the doctor's output with the [`MedicTheme`] styles.

use std::io::Write;

use console::{Style, Term};

use crate::doctoring::report::StatusReporter;
use crate::doctoring::{CheckupIdentity, Status};

/// How much output to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Errors only.
    Quiet,
    /// Status lines and summaries.
    Normal,
    /// Everything, including informational lines.
    Verbose,
}

impl OutputMode {
    /// Whether status lines are shown in this mode.
    pub fn shows_status(&self) -> bool {
        !matches!(self, OutputMode::Quiet)
    }
}

/// Whether colored output should be used.
///
/// Honors the `NO_COLOR` convention and falls back to terminal detection.
pub fn should_use_colors() -> bool {
    std::env::var_os("NO_COLOR").is_none() && Term::stdout().features().colors_supported()
}

/// Medic's visual theme.
#[derive(Debug, Clone)]
pub struct MedicTheme {
    /// Style for passing status lines (green).
    pub success: Style,
    /// Style for warnings (orange).
    pub warning: Style,
    /// Style for errors (red bold).
    pub error: Style,
    /// Style for informational/secondary text (dim).
    pub dim: Style,
    /// Style for checkup titles (bold).
    pub title: Style,
}

impl Default for MedicTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl MedicTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
            title: Style::new().bold(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            dim: Style::new(),
            title: Style::new(),
        }
    }
}

/// Status reporter that writes styled lines to the terminal.
pub struct TerminalReporter {
    term: Term,
    theme: MedicTheme,
    mode: OutputMode,
}

impl TerminalReporter {
    /// Create a terminal reporter for the given output mode.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            MedicTheme::new()
        } else {
            MedicTheme::plain()
        };

        Self {
            term: Term::stdout(),
            theme,
            mode,
        }
    }

    /// Print a summary line below the status output.
    pub fn summary(&mut self, message: &str, ok: bool) {
        if ok && !self.mode.shows_status() {
            return;
        }
        let styled = if ok {
            self.theme.success.apply_to(message)
        } else {
            self.theme.error.apply_to(message)
        };
        writeln!(self.term, "{}", styled).ok();
    }

    /// Print a plain line, subject to the output mode.
    pub fn message(&mut self, message: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", message).ok();
        }
    }
}

impl StatusReporter for TerminalReporter {
    fn begin_checkup(&mut self, identity: &CheckupIdentity) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.title.apply_to(&identity.title)).ok();
        }
    }

    fn report_status(&mut self, message: &str, status: Option<Status>) {
        // Errors are always shown, even in quiet mode.
        if !self.mode.shows_status() && status != Some(Status::Error) {
            return;
        }

        let line = match status {
            Some(Status::Ok) => format!("  {} {}", self.theme.success.apply_to("✓"), message),
            Some(Status::Warning) => format!("  {} {}", self.theme.warning.apply_to("!"), message),
            Some(Status::Error) => format!("  {} {}", self.theme.error.apply_to("✗"), message),
            None => format!("  {}", self.theme.dim.apply_to(message)),
        };
        writeln!(self.term, "{}", line).ok();
    }
}
