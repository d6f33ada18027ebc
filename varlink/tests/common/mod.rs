//! Common test utilities for integration tests.
//!
//! This module provides a builder for throwaway project trees containing
//! `environments` directories and `.tfvars` files.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Builder for a temporary directory tree.
///
/// # Examples
///
/// ```no_run
/// # use common::ProjectTree;
/// let tree = ProjectTree::new()
///     .dir("infra/environments/dev/app")
///     .file("infra/environments/dev/dev.tfvars", "region = \"eu-west-1\"\n");
/// let start = tree.path("infra/environments/dev/app");
/// ```
pub struct ProjectTree {
    root: TempDir,
}

#[allow(dead_code)]
impl ProjectTree {
    /// Creates an empty tree in a fresh temporary directory.
    pub fn new() -> Self {
        Self {
            root: tempfile::tempdir().unwrap(),
        }
    }

    /// Creates a directory (and its parents) relative to the root.
    pub fn dir(self, relative: &str) -> Self {
        fs::create_dir_all(self.root.path().join(relative)).unwrap();
        self
    }

    /// Writes a file relative to the root, creating parent directories.
    pub fn file(self, relative: &str, contents: &str) -> Self {
        let path = self.root.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, contents).unwrap();
        self
    }

    /// Absolute path of `relative` inside the tree.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    /// The tree's root directory.
    pub fn root(&self) -> &Path {
        self.root.path()
    }
}

/// A typical layout: shared vars in `environments`, per-env vars in
/// `environments/staging`, and a service directory below it.
#[allow(dead_code)]
pub fn staging_project() -> ProjectTree {
    ProjectTree::new()
        .file(
            "infra/environments/common.tfvars",
            "region = \"us-east-1\"\nowner = platform\n",
        )
        .file(
            "infra/environments/staging/staging.tfvars",
            "# staging sizing\ninstance_type = \"t3.medium\"\nreplicas=2\n",
        )
        .file(
            "infra/environments/staging/api/api.tfvars",
            "service = api\nreplicas = 3\n",
        )
        .file("infra/environments/staging/api/README.md", "not a variable file\n")
        .file("infra/project.tfvars", "project = \"shop\"\n")
}
