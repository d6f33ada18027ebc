//! Library exports for varlink-cli.
//!
//! This module exports the CLI structure for use by tests and tooling that
//! needs the full command definition.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;
