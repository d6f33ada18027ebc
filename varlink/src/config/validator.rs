//! Configuration validation.

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Validates a merged configuration.
///
/// # Examples
///
/// ```
/// use varlink::config::{Config, ConfigValidator};
///
/// ConfigValidator::validate(&Config::default()).unwrap();
///
/// let bad = Config { max_search_depth: Some(0), ..Default::default() };
/// assert!(ConfigValidator::validate(&bad).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a zero search depth or an unknown
    /// shell name.
    pub fn validate(config: &Config) -> Result<()> {
        if config.max_search_depth == Some(0) {
            return Err(Error::Validation {
                field: "max_search_depth".into(),
                message: "Search depth must be at least 1".into(),
            });
        }

        config.shell_type()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_configs() {
        ConfigValidator::validate(&Config {
            levels_above: Some(0),
            max_search_depth: Some(1),
            shell: Some("PowerShell".to_string()),
        })
        .unwrap();
    }

    #[test]
    fn test_zero_depth_rejected() {
        let err = ConfigValidator::validate(&Config {
            max_search_depth: Some(0),
            ..Default::default()
        })
        .unwrap_err();
        assert!(err.to_string().contains("max_search_depth"));
    }

    #[test]
    fn test_unknown_shell_rejected() {
        let err = ConfigValidator::validate(&Config {
            shell: Some("tcsh".to_string()),
            ..Default::default()
        })
        .unwrap_err();
        assert!(err.to_string().contains("shell"));
    }
}
