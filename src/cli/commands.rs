//! Command implementations.

use clap::CommandFactory;

use super::args::{CheckArgs, Cli, Commands, CompletionsArgs};
use crate::checkups::built_in_checkups;
use crate::doctoring::{Checkup, Doctor, Platform, RecordingReporter};
use crate::error::Result;
use crate::ui::{OutputMode, TerminalReporter};

/// Result of executing a command.
#[derive(Debug, Clone, Copy)]
pub struct CommandResult {
    pub exit_code: i32,
}

impl CommandResult {
    pub fn success() -> Self {
        Self { exit_code: 0 }
    }

    pub fn failure(exit_code: i32) -> Self {
        Self { exit_code }
    }
}

/// Dispatches parsed CLI arguments to command implementations.
pub struct CommandDispatcher;

impl Default for CommandDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandDispatcher {
    pub fn new() -> Self {
        Self
    }

    /// Execute the command selected by the CLI arguments.
    pub fn dispatch(&self, cli: &Cli) -> Result<CommandResult> {
        let mode = if cli.quiet {
            OutputMode::Quiet
        } else if cli.verbose {
            OutputMode::Verbose
        } else {
            OutputMode::Normal
        };

        match &cli.command {
            None => self.check(&CheckArgs::default(), mode),
            Some(Commands::Check(args)) => self.check(args, mode),
            Some(Commands::List) => self.list(mode),
            Some(Commands::Completions(args)) => self.completions(args),
        }
    }

    fn check(&self, args: &CheckArgs, mode: OutputMode) -> Result<CommandResult> {
        let doctor = Doctor::new(built_in_checkups()?);

        let report = if args.json {
            // Per-line output is suppressed; the report is the output.
            let mut recorder = RecordingReporter::new();
            let report = doctor.run(&mut recorder);
            println!("{}", report.to_json()?);
            report
        } else {
            let mut reporter = TerminalReporter::new(mode);
            let report = doctor.run(&mut reporter);
            let summary = if report.ok {
                "No issues found.".to_string()
            } else {
                let failed = report.error_count();
                format!(
                    "{} {} failed.",
                    failed,
                    if failed == 1 { "checkup" } else { "checkups" }
                )
            };
            reporter.summary(&summary, report.ok);
            report
        };

        if report.ok {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }

    fn list(&self, mode: OutputMode) -> Result<CommandResult> {
        let platform = Platform::current();
        let mut reporter = TerminalReporter::new(mode);

        for checkup in built_in_checkups()? {
            let applicability = if checkup.is_platform_supported(platform) {
                "applicable".to_string()
            } else {
                format!("not applicable on {}", platform)
            };
            reporter.message(&format!(
                "{} - {} ({})",
                checkup.id(),
                checkup.title(),
                applicability
            ));
        }

        Ok(CommandResult::success())
    }

    fn completions(&self, args: &CompletionsArgs) -> Result<CommandResult> {
        let mut command = Cli::command();
        clap_complete::generate(args.shell, &mut command, "medic", &mut std::io::stdout());
        Ok(CommandResult::success())
    }
}
