//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands:
//! configuration loading and shell selection.

use crate::error::CliError;
use std::path::PathBuf;
use varlink::output::ShellType;
use varlink::{Config, ConfigBuilder};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
#[allow(dead_code)] // verbose is carried for commands that want extra detail
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Explicit configuration file.
    pub config: Option<PathBuf>,
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Command-line flags (`overrides`, highest priority)
/// 2. Environment variables
/// 3. Configuration file
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions, overrides: Config) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();
    if let Some(path) = &global.config {
        builder = builder.with_config_file(path);
    }

    builder
        .with_config(overrides)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Parse a `--shell` value.
pub fn parse_shell_arg(shell: Option<&str>) -> Result<Option<ShellType>, CliError> {
    shell
        .map(|name| {
            ShellType::from_string(name).map_err(|_| {
                CliError::InvalidArguments(format!(
                    "unknown shell '{name}' (expected bash, zsh, fish, or powershell)"
                ))
            })
        })
        .transpose()
}

/// Pick the shell to emit statements for.
///
/// An explicit `--shell` wins, then the configured shell, then detection
/// from the environment.
pub fn resolve_shell(shell: Option<&str>, config: &Config) -> Result<ShellType, CliError> {
    if let Some(shell) = parse_shell_arg(shell)? {
        return Ok(shell);
    }
    let configured = config
        .shell_type()
        .map_err(|e| CliError::Config(e.to_string()))?;
    Ok(configured.unwrap_or_else(ShellType::detect))
}
