//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{ActivateCommand, CompletionsCommand, DeactivateCommand};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for linking Terraform environments to shell variables.
#[derive(Parser)]
#[command(name = "varlink")]
#[command(
    version,
    about = "Export tfvars from the enclosing Terraform environment as TF_VAR_* variables",
    long_about = None
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Read configuration from this file instead of ~/.varlink/config.yaml
    #[arg(long, value_name = "PATH", global = true, env = "VARLINK_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Print exports for the enclosing environment's variables
    ///
    /// Use as `eval "$(varlink activate)"` so the variables land in the
    /// calling shell.
    Activate(ActivateCommand),

    /// Print statements removing every TF_VAR_* variable
    ///
    /// Use as `eval "$(varlink deactivate)"`.
    Deactivate(DeactivateCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
