//! CLI-specific error types with exit codes.
//!
//! This module defines error types specific to the CLI layer,
//! wrapping library errors and providing appropriate exit codes.

use std::fmt;
use varlink::Error as LibError;

/// CLI-specific error type with exit code mapping.
#[derive(Debug)]
pub enum CliError {
    /// Library error (wrapped).
    Library(LibError),

    /// Invalid command-line arguments.
    InvalidArguments(String),

    /// Configuration error.
    Config(String),
}

impl CliError {
    /// Get the appropriate exit code for this error.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 1: No environment found
    /// - 2: Maximum search depth exceeded
    /// - 3: A variable file could not be read
    /// - 4: Invalid arguments
    /// - 7: Configuration error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Library(lib_err) => match lib_err {
                LibError::EnvironmentNotFound { .. } => 1,
                LibError::SearchDepthExceeded { .. } => 2,
                LibError::FileRead { .. } => 3,
                LibError::PathResolution { .. } => 4,
                LibError::InvalidConfigFile { .. } | LibError::Validation { .. } => 7,
            },
            CliError::InvalidArguments(_) => 4,
            CliError::Config(_) => 7,
        }
    }

    /// A suggestion for fixing the error, if there is one.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            CliError::Library(LibError::EnvironmentNotFound { .. }) => Some(
                "run varlink from within a project that has an 'environments' directory, \
                 or adjust the search with --levels and --max-depth",
            ),
            CliError::Library(LibError::SearchDepthExceeded { .. }) => Some(
                "run varlink closer to your environment directory or raise --max-depth",
            ),
            CliError::Library(LibError::FileRead { .. }) => {
                Some("check that every .tfvars file on the path is readable UTF-8 text")
            }
            CliError::Library(LibError::PathResolution { .. }) => {
                Some("pass an existing directory with --dir")
            }
            CliError::Config(_)
            | CliError::Library(
                LibError::InvalidConfigFile { .. } | LibError::Validation { .. },
            ) => Some("check ~/.varlink/config.yaml (or --config) and any VARLINK_* variables"),
            CliError::InvalidArguments(_) => Some("run 'varlink --help' for usage"),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Library(e) => write!(f, "{e}"),
            CliError::InvalidArguments(msg) => write!(f, "Invalid arguments: {msg}"),
            CliError::Config(msg) => write!(f, "Configuration error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Library(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LibError> for CliError {
    fn from(e: LibError) -> Self {
        CliError::Library(e)
    }
}
