//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `activate`: Export variables for the enclosing environment
//! - `deactivate`: Remove every `TF_VAR_*` variable
//! - `completions`: Generate shell completion scripts

pub mod activate;
pub mod completions;
pub mod deactivate;

pub use activate::ActivateCommand;
pub use completions::CompletionsCommand;
pub use deactivate::DeactivateCommand;
