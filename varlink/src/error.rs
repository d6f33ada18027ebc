//! Error types for the varlink library.
//!
//! This module provides the error hierarchy for environment discovery,
//! tfvars parsing, and configuration loading, using `thiserror` for
//! ergonomic error handling.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a varlink error.
///
/// # Examples
///
/// ```
/// use varlink::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(10)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the varlink library.
#[derive(Debug, Error)]
pub enum Error {
    /// The starting directory could not be resolved to an absolute path.
    #[error("cannot resolve path {}: {reason}", path.display())]
    PathResolution {
        /// The path that could not be resolved.
        path: PathBuf,
        /// The reason resolution failed.
        reason: String,
    },

    /// The upward walk visited more directories than allowed.
    #[error("exceeded maximum search depth of {limit} directories")]
    SearchDepthExceeded {
        /// The configured maximum search depth.
        limit: usize,
    },

    /// The walk finished without finding an `environments` directory.
    #[error("couldn't find 'environments' directory in the path of {}", start.display())]
    EnvironmentNotFound {
        /// The directory the search started from.
        start: PathBuf,
    },

    /// A variable file could not be opened or read.
    #[error("error reading variable file {}: {source}", path.display())]
    FileRead {
        /// The file that failed to read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A configuration file exists but could not be loaded.
    #[error("invalid configuration file {}: {reason}", path.display())]
    InvalidConfigFile {
        /// The configuration file path.
        path: PathBuf,
        /// The reason loading failed.
        reason: String,
    },

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
}

impl Error {
    /// Check if error indicates the project layout was not recognized.
    ///
    /// # Examples
    ///
    /// ```
    /// use varlink::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::EnvironmentNotFound { start: PathBuf::from("/tmp") };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::EnvironmentNotFound { .. })
    }

    /// Check if error came from the search depth guard.
    #[must_use]
    pub fn is_depth_exceeded(&self) -> bool {
        matches!(self, Self::SearchDepthExceeded { .. })
    }
}
