//! Main entry point for the varlink CLI.
//!
//! This is the command-line interface for linking Terraform environments to
//! shell variables. It provides commands for:
//! - `activate`: Emit `TF_VAR_*` exports for the enclosing environment
//! - `deactivate`: Emit statements removing every `TF_VAR_*` variable
//! - `completions`: Generate shell completion scripts

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Route library diagnostics to stderr at the requested verbosity
    varlink::init_logger(cli.verbose, cli.quiet).install();

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        config: cli.config,
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::Activate(cmd) => cmd.execute(&global),
        cli::Command::Deactivate(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            if let Some(hint) = e.hint() {
                eprintln!("Hint: {hint}");
            }
            std::process::exit(e.exit_code());
        }
    }
}
