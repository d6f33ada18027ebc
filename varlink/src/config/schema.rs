//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

use crate::discovery::{SearchLimits, DEFAULT_LEVELS_ABOVE, DEFAULT_MAX_SEARCH_DEPTH};
use crate::error::Result;
use crate::output::ShellType;

/// Complete configuration structure.
///
/// Every field is optional so that layers can be merged; unset fields fall
/// back to the built-in defaults.
///
/// # Examples
///
/// ```
/// use varlink::config::Config;
///
/// let config = Config {
///     levels_above: Some(2),
///     ..Default::default()
/// };
/// let limits = config.limits();
/// assert_eq!(limits.levels_above, 2);
/// assert_eq!(limits.max_search_depth, 10);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Directories to keep walking above the `environments` directory.
    pub levels_above: Option<usize>,

    /// Maximum number of directories the upward walk may visit.
    pub max_search_depth: Option<usize>,

    /// Shell to emit statements for (bash, zsh, fish, powershell).
    pub shell: Option<String>,
}

impl Config {
    /// Search limits with defaults filled in.
    #[must_use]
    pub fn limits(&self) -> SearchLimits {
        SearchLimits::new(
            self.levels_above.unwrap_or(DEFAULT_LEVELS_ABOVE),
            self.max_search_depth.unwrap_or(DEFAULT_MAX_SEARCH_DEPTH),
        )
    }

    /// The configured shell, if any.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the shell name is not recognized.
    pub fn shell_type(&self) -> Result<Option<ShellType>> {
        self.shell.as_deref().map(ShellType::from_string).transpose()
    }
}
