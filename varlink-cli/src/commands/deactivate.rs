//! Deactivate command implementation.
//!
//! This module implements the `deactivate` command, which prints statements
//! removing every `TF_VAR_*` variable from the calling shell.

use crate::error::CliError;
use crate::utils::{load_configuration, resolve_shell, GlobalOptions};
use clap::Args;
use varlink::env::{self, ProcessEnv, ShellScript};
use varlink::Config;

/// Remove every `TF_VAR_*` variable.
#[derive(Args)]
pub struct DeactivateCommand {
    /// Shell type for unset statements (auto-detect if not specified)
    #[arg(long)]
    pub shell: Option<String>,
}

impl DeactivateCommand {
    /// Execute the deactivate command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global, Config::default())?;
        let shell = resolve_shell(self.shell.as_deref(), &config)?;

        // The variables to remove are the ones this process inherited.
        let mut script = ShellScript::new(shell, &ProcessEnv);
        let removed = env::deactivate(&mut script);

        if !script.statements().is_empty() {
            println!("{}", script.render());
        }

        if !global.quiet {
            log::info!("Removed {} variable(s)", removed.len());
            eprintln!("Terraform environment variables have been deactivated.");
        }

        Ok(())
    }
}
