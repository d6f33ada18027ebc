//! Integration tests for the configuration system.
//!
//! Tests that modify environment variables are marked with `#[serial]` so
//! they never observe each other's changes.

mod common;

use std::env;
use std::fs;

use common::{staging_project, ProjectTree};
use serial_test::serial;
use varlink::config::{Config, ConfigBuilder};
use varlink::error::Error;
use varlink::ActivatePlan;

const VARLINK_VARS: &[&str] = &[
    "VARLINK_LEVELS_ABOVE",
    "VARLINK_MAX_SEARCH_DEPTH",
    "VARLINK_SHELL",
];

/// Runs `f` with `HOME` pointing at `home` and no `VARLINK_*` variables set.
fn with_home<T>(home: &std::path::Path, f: impl FnOnce() -> T) -> T {
    let saved_home = env::var_os("HOME");
    let saved: Vec<_> = VARLINK_VARS.iter().map(|v| (*v, env::var_os(v))).collect();

    env::set_var("HOME", home);
    for var in VARLINK_VARS {
        env::remove_var(var);
    }

    let result = f();

    match saved_home {
        Some(value) => env::set_var("HOME", value),
        None => env::remove_var("HOME"),
    }
    for (var, value) in saved {
        match value {
            Some(value) => env::set_var(var, value),
            None => env::remove_var(var),
        }
    }
    result
}

#[test]
#[serial]
#[cfg(unix)]
fn test_user_config_is_loaded_from_home() {
    let home = ProjectTree::new().file(".varlink/config.yaml", "levels_above: 0\nshell: fish\n");

    let config = with_home(home.root(), || ConfigBuilder::new().build()).unwrap();
    assert_eq!(config.levels_above, Some(0));
    assert_eq!(config.shell.as_deref(), Some("fish"));
}

#[test]
#[serial]
#[cfg(unix)]
fn test_missing_user_config_gives_defaults() {
    let home = ProjectTree::new();
    let config = with_home(home.root(), || ConfigBuilder::new().build()).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
#[serial]
#[cfg(unix)]
fn test_env_overrides_user_config() {
    let home = ProjectTree::new().file(".varlink/config.yaml", "max_search_depth: 3\n");

    let config = with_home(home.root(), || {
        env::set_var("VARLINK_MAX_SEARCH_DEPTH", "12");
        ConfigBuilder::new().build()
    })
    .unwrap();
    assert_eq!(config.max_search_depth, Some(12));
}

#[test]
#[serial]
#[cfg(unix)]
fn test_invalid_env_value_is_an_error() {
    let home = ProjectTree::new();
    let result = with_home(home.root(), || {
        env::set_var("VARLINK_LEVELS_ABOVE", "one");
        ConfigBuilder::new().build()
    });
    assert!(matches!(result, Err(Error::Validation { .. })));
}

#[test]
#[serial]
#[cfg(unix)]
fn test_broken_user_config_is_reported() {
    let home = ProjectTree::new().file(".varlink/config.yaml", "levels_above: lots\n");
    let result = with_home(home.root(), || ConfigBuilder::new().build());
    assert!(matches!(result, Err(Error::InvalidConfigFile { .. })));
}

#[test]
fn test_explicit_config_file_drives_discovery() {
    let tree = staging_project().file("varlink.yaml", "levels_above: 0\n");

    let config = ConfigBuilder::new()
        .skip_env()
        .with_config_file(tree.path("varlink.yaml"))
        .build()
        .unwrap();

    let plan = ActivatePlan::for_dir(
        &tree.path("infra/environments/staging/api"),
        config.limits(),
    )
    .unwrap();
    // levels_above: 0 leaves infra/project.tfvars out.
    assert!(!plan.variables.contains_key("project"));
    assert_eq!(plan.files.len(), 3);
}

#[test]
fn test_explicit_config_rejects_zero_depth() {
    let tree = ProjectTree::new().file("varlink.yaml", "max_search_depth: 0\n");
    let result = ConfigBuilder::new()
        .skip_env()
        .with_config_file(tree.path("varlink.yaml"))
        .build();
    assert!(matches!(result, Err(Error::Validation { .. })));
}
