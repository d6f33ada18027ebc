//! Projection of parsed variables onto an environment.
//!
//! Terraform reads input variables from `TF_VAR_<name>` environment
//! variables. Activation sets one such variable per parsed key; deactivation
//! removes every variable carrying the prefix. Both work against an
//! [`EnvStore`] so callers choose what is actually mutated:
//!
//! - [`ProcessEnv`] changes the environment of the running process
//! - [`MemoryEnv`] is a plain in-memory map
//! - [`ShellScript`] records shell statements for a parent shell to `eval`

use std::collections::BTreeMap;
use std::env;
use std::path::Path;

use crate::discovery::SearchLimits;
use crate::error::Result;
use crate::operations::{ActivatePlan, ActivateResult, DeactivatePlan};
use crate::output::{is_valid_env_var_name, ShellType};
use crate::tfvars::VariableMap;

/// Prefix Terraform uses for input variables taken from the environment.
pub const TF_VAR_PREFIX: &str = "TF_VAR_";

/// A mutable set of environment variables.
pub trait EnvStore {
    /// Set `name` to `value`.
    ///
    /// Returns `false` if the store cannot hold a variable called `name`.
    fn set(&mut self, name: &str, value: &str) -> bool;

    /// Remove `name` if present.
    fn remove(&mut self, name: &str);

    /// Names of all variables currently set.
    fn names(&self) -> Vec<String>;
}

/// The environment of the current process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvStore for ProcessEnv {
    fn set(&mut self, name: &str, value: &str) -> bool {
        if name.is_empty() || name.contains(['=', '\0']) || value.contains('\0') {
            log::warn!("Skipping '{name}': cannot be set in the process environment");
            return false;
        }
        env::set_var(name, value);
        true
    }

    fn remove(&mut self, name: &str) {
        env::remove_var(name);
    }

    fn names(&self) -> Vec<String> {
        env::vars_os()
            .filter_map(|(name, _)| name.into_string().ok())
            .collect()
    }
}

/// An in-memory environment.
///
/// # Examples
///
/// ```
/// use varlink::env::{deactivate, MemoryEnv};
///
/// let mut store: MemoryEnv = [("TF_VAR_region", "eu-west-1"), ("HOME", "/home/dev")]
///     .into_iter()
///     .collect();
///
/// let removed = deactivate(&mut store);
/// assert_eq!(removed, vec!["TF_VAR_region".to_string()]);
/// assert_eq!(store.get("HOME"), Some("/home/dev"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryEnv {
    vars: BTreeMap<String, String>,
}

impl MemoryEnv {
    /// Create an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a variable.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    /// Number of variables set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Returns `true` if no variables are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MemoryEnv {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl EnvStore for MemoryEnv {
    fn set(&mut self, name: &str, value: &str) -> bool {
        self.vars.insert(name.to_string(), value.to_string());
        true
    }

    fn remove(&mut self, name: &str) {
        self.vars.remove(name);
    }

    fn names(&self) -> Vec<String> {
        self.vars.keys().cloned().collect()
    }
}

/// Records environment changes as shell statements.
///
/// A child process cannot change its parent shell's environment, so the CLI
/// prints these statements for the shell to evaluate. The variable names
/// visible through [`EnvStore::names`] start as a snapshot of another store
/// and track the recorded changes.
///
/// # Examples
///
/// ```
/// use varlink::env::{EnvStore, MemoryEnv, ShellScript};
/// use varlink::output::ShellType;
///
/// let mut script = ShellScript::new(ShellType::Bash, &MemoryEnv::new());
/// script.set("TF_VAR_env", "dev");
/// script.remove("TF_VAR_old");
/// assert_eq!(script.render(), "export TF_VAR_env=dev\nunset TF_VAR_old");
/// ```
#[derive(Debug, Clone)]
pub struct ShellScript {
    shell: ShellType,
    names: Vec<String>,
    statements: Vec<String>,
}

impl ShellScript {
    /// Start a script for `shell`, seeding visible names from `source`.
    pub fn new<S: EnvStore + ?Sized>(shell: ShellType, source: &S) -> Self {
        Self {
            shell,
            names: source.names(),
            statements: Vec::new(),
        }
    }

    /// The shell statements are rendered for.
    #[must_use]
    pub const fn shell(&self) -> ShellType {
        self.shell
    }

    /// Recorded statements, in order.
    #[must_use]
    pub fn statements(&self) -> &[String] {
        &self.statements
    }

    /// Render all statements, one per line.
    #[must_use]
    pub fn render(&self) -> String {
        self.statements.join("\n")
    }
}

impl EnvStore for ShellScript {
    fn set(&mut self, name: &str, value: &str) -> bool {
        if !is_valid_env_var_name(name) {
            log::warn!("Skipping '{name}': not a valid variable name for {}", self.shell);
            return false;
        }
        self.statements.push(self.shell.format_export(name, value));
        if !self.names.iter().any(|n| n == name) {
            self.names.push(name.to_string());
        }
        true
    }

    fn remove(&mut self, name: &str) {
        if !is_valid_env_var_name(name) {
            log::warn!("Skipping '{name}': not a valid variable name for {}", self.shell);
            return;
        }
        self.statements.push(self.shell.format_unset(name));
        self.names.retain(|n| n != name);
    }

    fn names(&self) -> Vec<String> {
        self.names.clone()
    }
}

/// The environment variable name for a tfvars key.
///
/// # Examples
///
/// ```
/// assert_eq!(varlink::env::variable_name("region"), "TF_VAR_region");
/// ```
#[must_use]
pub fn variable_name(key: &str) -> String {
    format!("{TF_VAR_PREFIX}{key}")
}

/// Set `TF_VAR_<key>` for every parsed variable.
///
/// Returns the number of variables the store accepted.
pub fn apply<S: EnvStore + ?Sized>(vars: &VariableMap, store: &mut S) -> usize {
    let mut applied = 0;
    for (key, value) in vars {
        if store.set(&variable_name(key), value) {
            applied += 1;
        }
    }
    applied
}

/// Discover the environment around `start_dir` and set its variables.
///
/// Discovery and parsing finish before anything is written, so `store` is
/// unchanged when an error is returned.
///
/// # Errors
///
/// Returns any discovery or variable file error.
pub fn activate<S: EnvStore + ?Sized>(
    store: &mut S,
    start_dir: &Path,
    limits: SearchLimits,
) -> Result<ActivateResult> {
    let plan = ActivatePlan::for_dir(start_dir, limits)?;
    Ok(plan.execute(store))
}

/// Remove every variable whose name starts with `TF_VAR_`.
///
/// Other variables are left untouched. Returns the removed names, sorted.
pub fn deactivate<S: EnvStore + ?Sized>(store: &mut S) -> Vec<String> {
    let plan = DeactivatePlan::build(&*store);
    plan.execute(store);
    plan.variables
}
