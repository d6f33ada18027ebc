//! Output formatting for activations.
//!
//! This module renders an [`ActivatePlan`] as shell statements, JSON, dotenv
//! lines, or a human-readable dry-run report.

mod formatters;
mod shell;

use crate::operations::ActivatePlan;
use crate::Result;

pub use formatters::{DotenvFormatter, ExportFormatter, HumanFormatter, JsonFormatter};
pub use shell::{is_valid_env_var_name, ShellType};

/// Trait for formatting an activation into an output format.
pub trait OutputFormatter {
    /// Format the given activation plan into a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the formatting fails (e.g., JSON serialization).
    fn format(&self, plan: &ActivatePlan) -> Result<String>;
}

/// Available output formats for activations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Shell-specific export statements.
    Export(ShellType),
    /// JSON format.
    Json,
    /// Dotenv (.env file) format.
    Dotenv,
    /// Human-readable dry-run report.
    Human,
}

impl OutputFormat {
    /// Create a formatter for this output format.
    #[must_use]
    pub fn create_formatter(&self) -> Box<dyn OutputFormatter> {
        match self {
            Self::Export(shell) => Box::new(ExportFormatter::new(*shell)),
            Self::Json => Box::new(JsonFormatter),
            Self::Dotenv => Box::new(DotenvFormatter),
            Self::Human => Box::new(HumanFormatter),
        }
    }
}
