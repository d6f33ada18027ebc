//! Deactivation planning and execution.

use crate::env::{EnvStore, TF_VAR_PREFIX};

/// The set of `TF_VAR_*` variables a deactivation removes.
///
/// # Examples
///
/// ```
/// use varlink::env::MemoryEnv;
/// use varlink::operations::DeactivatePlan;
///
/// let mut store: MemoryEnv = [("TF_VAR_env", "dev"), ("EDITOR", "vim")].into_iter().collect();
/// let plan = DeactivatePlan::build(&store);
/// assert_eq!(plan.variables, vec!["TF_VAR_env".to_string()]);
///
/// plan.execute(&mut store);
/// assert!(store.get("TF_VAR_env").is_none());
/// assert_eq!(store.get("EDITOR"), Some("vim"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeactivatePlan {
    /// Variables to remove, sorted by name.
    pub variables: Vec<String>,
}

impl DeactivatePlan {
    /// Collect every `TF_VAR_*` variable currently in `store`.
    pub fn build<S: EnvStore + ?Sized>(store: &S) -> Self {
        let mut variables: Vec<String> = store
            .names()
            .into_iter()
            .filter(|name| name.starts_with(TF_VAR_PREFIX))
            .collect();
        variables.sort();
        Self { variables }
    }

    /// Returns `true` if there is nothing to remove.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Remove the planned variables from `store`.
    ///
    /// Returns the number of variables removed.
    pub fn execute<S: EnvStore + ?Sized>(&self, store: &mut S) -> usize {
        for name in &self.variables {
            store.remove(name);
        }
        log::debug!("Removed {} {TF_VAR_PREFIX}* variable(s)", self.variables.len());
        self.variables.len()
    }
}
