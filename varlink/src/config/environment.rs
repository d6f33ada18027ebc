//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `VARLINK_*` environment variables that
//! override configuration file values.

use std::env;

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Overrides the number of levels to search above `environments`.
pub const LEVELS_ABOVE_ENV: &str = "VARLINK_LEVELS_ABOVE";

/// Overrides the maximum search depth.
pub const MAX_SEARCH_DEPTH_ENV: &str = "VARLINK_MAX_SEARCH_DEPTH";

/// Overrides the shell statements are emitted for.
pub const SHELL_ENV: &str = "VARLINK_SHELL";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```
/// use varlink::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides_from(&mut config, |name| {
///     (name == "VARLINK_LEVELS_ABOVE").then(|| "3".to_string())
/// })
/// .unwrap();
/// assert_eq!(config.levels_above, Some(3));
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// Reads the `VARLINK_*` environment variables and applies them with
    /// higher precedence than file-based configs.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable does not hold a non-negative
    /// integer.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        Self::apply_overrides_from(config, |name| env::var(name).ok())
    }

    /// Apply overrides read through a custom lookup function.
    ///
    /// # Errors
    ///
    /// See [`EnvironmentConfig::apply_overrides`].
    pub fn apply_overrides_from<F>(config: &mut Config, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup(LEVELS_ABOVE_ENV) {
            config.levels_above = Some(Self::parse_count(LEVELS_ABOVE_ENV, &val)?);
        }

        if let Some(val) = lookup(MAX_SEARCH_DEPTH_ENV) {
            config.max_search_depth = Some(Self::parse_count(MAX_SEARCH_DEPTH_ENV, &val)?);
        }

        if let Some(shell) = lookup(SHELL_ENV) {
            if !shell.trim().is_empty() {
                config.shell = Some(shell.trim().to_string());
            }
        }

        Ok(())
    }

    fn parse_count(field: &str, s: &str) -> Result<usize> {
        s.trim().parse().map_err(|_| Error::Validation {
            field: field.into(),
            message: format!("Must be a non-negative integer, got '{s}'"),
        })
    }
}
