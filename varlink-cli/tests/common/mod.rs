//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary project trees
//! - Command builder helpers isolated from the caller's environment

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Variables that would otherwise leak configuration into tests.
const ISOLATED_VARS: &[&str] = &[
    "VARLINK_CONFIG",
    "VARLINK_LEVELS_ABOVE",
    "VARLINK_MAX_SEARCH_DEPTH",
    "VARLINK_SHELL",
    "VARLINK_LOG_MODE",
];

/// Test environment with an isolated home directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Home directory used by the binary
    pub home: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let home = temp_path.join("home");
        fs::create_dir_all(&home).expect("Failed to create home directory");

        Self {
            temp_dir,
            temp_path,
            home,
        }
    }

    /// Get a command builder running in `dir`, isolated from user config.
    pub fn command_in(&self, dir: &Path) -> Command {
        let mut cmd = Command::cargo_bin("varlink").expect("Failed to find varlink binary");
        cmd.current_dir(dir).env("HOME", &self.home);
        for var in ISOLATED_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Get a command builder running in the temp root.
    pub fn command(&self) -> Command {
        self.command_in(&self.temp_path)
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Create a subdirectory in the test environment.
    pub fn create_dir(&self, name: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Write a file in the test environment, creating parent directories.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Write the user configuration file under the isolated home.
    pub fn write_user_config(&self, contents: &str) -> PathBuf {
        let dir = self.home.join(".varlink");
        fs::create_dir_all(&dir).expect("Failed to create config directory");
        let path = dir.join("config.yaml");
        fs::write(&path, contents).expect("Failed to write config");
        path
    }

    /// Lay out `infra/environments/{common.tfvars, dev/dev.tfvars, dev/app/}`.
    ///
    /// Returns the `dev/app` directory.
    pub fn dev_project(&self) -> PathBuf {
        self.write_file(
            "infra/environments/common.tfvars",
            "region = \"us-east-1\"\nowner = platform\n",
        );
        self.write_file(
            "infra/environments/dev/dev.tfvars",
            "instance_type = t3.micro\nname = \"dev box\"\n",
        );
        self.create_dir("infra/environments/dev/app")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
