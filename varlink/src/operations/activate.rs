//! Activation planning and execution.
//!
//! Planning runs the environment walk and parses every variable file it
//! found. Nothing is written to the environment until the plan executes, so
//! a failure during discovery or parsing leaves the environment untouched.

use std::path::{Path, PathBuf};

use crate::discovery::{EnvironmentLocator, SearchLimits};
use crate::env::{self, EnvStore};
use crate::error::Result;
use crate::output::is_valid_env_var_name;
use crate::tfvars::{VariableFileParser, VariableMap};

/// Options for an activation.
///
/// # Examples
///
/// ```
/// use varlink::discovery::SearchLimits;
/// use varlink::operations::ActivateOptions;
/// use std::path::PathBuf;
///
/// let options = ActivateOptions::new(PathBuf::from("environments/dev"))
///     .with_limits(SearchLimits::new(0, 5));
/// assert_eq!(options.limits.max_search_depth, 5);
/// ```
#[derive(Debug, Clone)]
pub struct ActivateOptions {
    /// Directory the environment search starts from.
    pub start_dir: PathBuf,
    /// Bounds for the upward walk.
    pub limits: SearchLimits,
}

impl ActivateOptions {
    /// Create options with default search limits.
    #[must_use]
    pub fn new(start_dir: PathBuf) -> Self {
        Self {
            start_dir,
            limits: SearchLimits::default(),
        }
    }

    /// Set the search limits.
    #[must_use]
    pub const fn with_limits(mut self, limits: SearchLimits) -> Self {
        self.limits = limits;
        self
    }
}

/// A fully resolved activation, ready to apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivatePlan {
    /// Name of the detected environment.
    pub environment: String,
    /// Variable files in merge order.
    pub files: Vec<PathBuf>,
    /// Merged variables, keyed by tfvars name (without prefix).
    pub variables: VariableMap,
    /// The absolute directory the search started from.
    pub start_dir: PathBuf,
}

impl ActivatePlan {
    /// Discover the environment and parse its variable files.
    ///
    /// # Errors
    ///
    /// Returns any discovery error (path resolution, search depth, missing
    /// environment) or the first variable file read error.
    pub fn build(options: &ActivateOptions) -> Result<Self> {
        let discovery = EnvironmentLocator::new(options.limits).locate(&options.start_dir)?;
        log::debug!(
            "Environment '{}' with {} variable file(s)",
            discovery.environment,
            discovery.files.len()
        );

        let variables = VariableFileParser::new(discovery.files.clone()).parse()?;

        Ok(Self {
            environment: discovery.environment,
            files: discovery.files,
            variables,
            start_dir: discovery.start_dir,
        })
    }

    /// Convenience wrapper around [`ActivatePlan::build`].
    ///
    /// # Errors
    ///
    /// See [`ActivatePlan::build`].
    pub fn for_dir(start_dir: &Path, limits: SearchLimits) -> Result<Self> {
        Self::build(&ActivateOptions::new(start_dir.to_path_buf()).with_limits(limits))
    }

    /// Environment variable names a shell can export, with their values.
    ///
    /// Keys whose prefixed name is not a valid variable name are left out;
    /// see [`ActivatePlan::skipped`].
    #[must_use]
    pub fn exports(&self) -> Vec<(String, &str)> {
        self.variables
            .iter()
            .map(|(key, value)| (env::variable_name(key), value.as_str()))
            .filter(|(name, _)| is_valid_env_var_name(name))
            .collect()
    }

    /// Prefixed names a shell cannot export.
    #[must_use]
    pub fn skipped(&self) -> Vec<String> {
        self.variables
            .keys()
            .map(|key| env::variable_name(key))
            .filter(|name| !is_valid_env_var_name(name))
            .collect()
    }

    /// Apply the plan to `store`.
    pub fn execute<S: EnvStore + ?Sized>(&self, store: &mut S) -> ActivateResult {
        let applied = env::apply(&self.variables, store);
        ActivateResult {
            environment: self.environment.clone(),
            applied,
        }
    }
}

/// Outcome of executing an [`ActivatePlan`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivateResult {
    /// Name of the activated environment.
    pub environment: String,
    /// Number of variables the store accepted.
    pub applied: usize,
}
