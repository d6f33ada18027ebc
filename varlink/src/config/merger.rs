//! Configuration merging and precedence handling.

use crate::config::schema::Config;

/// Merges configuration layers according to precedence rules.
///
/// # Examples
///
/// ```
/// use varlink::config::{Config, ConfigMerger};
///
/// let low = Config { levels_above: Some(1), max_search_depth: Some(5), ..Default::default() };
/// let high = Config { levels_above: Some(3), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.levels_above, Some(3));
/// assert_eq!(result.max_search_depth, Some(5));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge source config into target (source overwrites target if set).
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.levels_above.is_some() {
            target.levels_above = source.levels_above;
        }

        if source.max_search_depth.is_some() {
            target.max_search_depth = source.max_search_depth;
        }

        if source.shell.is_some() {
            target.shell.clone_from(&source.shell);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_keeps_unset_fields() {
        let mut target = Config {
            levels_above: Some(2),
            max_search_depth: Some(8),
            shell: Some("bash".to_string()),
        };
        ConfigMerger::merge_into(&mut target, &Config::default());

        assert_eq!(target.levels_above, Some(2));
        assert_eq!(target.max_search_depth, Some(8));
        assert_eq!(target.shell.as_deref(), Some("bash"));
    }

    #[test]
    fn test_merge_order() {
        let mut result = Config {
            levels_above: Some(1),
            shell: Some("fish".to_string()),
            ..Default::default()
        };
        ConfigMerger::merge_into(
            &mut result,
            &Config {
                levels_above: Some(0),
                ..Default::default()
            },
        );

        assert_eq!(result.levels_above, Some(0));
        assert_eq!(result.shell.as_deref(), Some("fish"));
        assert_eq!(result.max_search_depth, None);
    }
}
