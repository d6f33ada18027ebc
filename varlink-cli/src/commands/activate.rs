//! Activate command implementation.
//!
//! This module implements the `activate` command, which finds the enclosing
//! environment, merges its variable files, and prints the result for the
//! calling shell to evaluate.

use crate::error::CliError;
use crate::utils::{load_configuration, parse_shell_arg, resolve_shell, GlobalOptions};
use clap::{Args, ValueEnum};
use std::path::PathBuf;
use varlink::operations::{ActivateOptions, ActivatePlan};
use varlink::output::OutputFormat;
use varlink::Config;

/// Export variables for the enclosing environment.
#[derive(Args)]
pub struct ActivateCommand {
    /// Directory to start searching from (default: current directory)
    #[arg(long, value_name = "PATH")]
    pub dir: Option<PathBuf>,

    /// Directories to keep scanning above the `environments` directory
    #[arg(long, value_name = "N")]
    pub levels: Option<usize>,

    /// Maximum number of directories to visit
    #[arg(long, value_name = "N")]
    pub max_depth: Option<usize>,

    /// Show what would be set without emitting any exports
    #[arg(long)]
    pub dry_run: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "export", ignore_case = true)]
    pub format: OutputFormatArg,

    /// Shell type for export format (auto-detect if not specified)
    #[arg(long)]
    pub shell: Option<String>,
}

/// Output format argument for clap.
#[derive(Debug, Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormatArg {
    /// Shell-specific export statements
    Export,
    /// JSON format
    Json,
    /// Dotenv (.env file) format
    Dotenv,
}

impl OutputFormatArg {
    /// Convert to `OutputFormat`, resolving the shell if needed.
    pub fn to_output_format(
        self,
        shell_arg: Option<&str>,
        config: &Config,
    ) -> Result<OutputFormat, CliError> {
        match self {
            Self::Export => Ok(OutputFormat::Export(resolve_shell(shell_arg, config)?)),
            Self::Json => Ok(OutputFormat::Json),
            Self::Dotenv => Ok(OutputFormat::Dotenv),
        }
    }
}

impl ActivateCommand {
    /// Execute the activate command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Validate arguments
        if self.max_depth == Some(0) {
            return Err(CliError::InvalidArguments(
                "--max-depth must be at least 1".to_string(),
            ));
        }
        parse_shell_arg(self.shell.as_deref())?;

        // 2. Load configuration, with flags on top
        let overrides = Config {
            levels_above: self.levels,
            max_search_depth: self.max_depth,
            shell: None,
        };
        let config = load_configuration(global, overrides)?;

        // 3. Discover the environment and parse its variable files
        let start_dir = self.dir.unwrap_or_else(|| PathBuf::from("."));
        let options = ActivateOptions::new(start_dir).with_limits(config.limits());
        let plan = ActivatePlan::build(&options)?;

        for file in &plan.files {
            log::info!("Using variable file {}", file.display());
        }

        // 4. Dry run: report and stop
        if self.dry_run {
            let report = OutputFormat::Human.create_formatter().format(&plan)?;
            println!("{report}");
            return Ok(());
        }

        // 5. Format output for the caller to evaluate
        let output_format = self.format.to_output_format(self.shell.as_deref(), &config)?;
        let formatted_output = output_format.create_formatter().format(&plan)?;
        if !formatted_output.is_empty() {
            println!("{formatted_output}");
        }

        // 6. Print status to stderr (human-readable, unless quiet)
        if !global.quiet {
            eprintln!("Environment set to: {}", plan.environment);
            eprintln!("Set {} environment variables", plan.exports().len());
        }

        Ok(())
    }
}
