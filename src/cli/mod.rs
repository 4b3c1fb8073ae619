//! Command-line interface for medic.
//!
//! This module provides the CLI argument parsing using clap's derive macros
//! and the command implementations.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{CheckArgs, Cli, Commands, CompletionsArgs};
pub use commands::{CommandDispatcher, CommandResult};
