//! Path normalization functions.
//!
//! Normalization is purely lexical: it expands a leading tilde, makes the
//! path absolute against the current directory, and folds `.` and `..`
//! components. Symlinks are never followed, so the walk reports directory
//! names exactly as the user's shell sees them.

use std::env;
use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// Expand tilde (~) to the home directory.
///
/// This function handles `~` and `~/path` but does not support `~user` syntax.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined or the path
/// uses `~user` syntax.
///
/// # Examples
///
/// ```
/// use varlink::path::normalize::expand_tilde;
/// use std::path::Path;
///
/// let expanded = expand_tilde(Path::new("~/infra")).unwrap();
/// assert!(expanded.is_absolute());
/// assert!(expanded.ends_with("infra"));
///
/// let expanded = expand_tilde(Path::new("/absolute")).unwrap();
/// assert_eq!(expanded, Path::new("/absolute"));
/// ```
pub fn expand_tilde(path: &Path) -> Result<PathBuf> {
    let Some(path_str) = path.to_str() else {
        // Non-UTF-8 paths cannot start with a literal tilde we care about.
        return Ok(path.to_path_buf());
    };

    if !path_str.starts_with('~') {
        return Ok(path.to_path_buf());
    }

    let home = home::home_dir().ok_or_else(|| Error::PathResolution {
        path: path.to_path_buf(),
        reason: "cannot determine home directory".to_string(),
    })?;

    if path_str == "~" {
        Ok(home)
    } else if let Some(rest) = path_str
        .strip_prefix("~/")
        .or_else(|| path_str.strip_prefix("~\\"))
    {
        Ok(home.join(rest))
    } else {
        Err(Error::PathResolution {
            path: path.to_path_buf(),
            reason: "~user syntax is not supported; use ~ or ~/path".to_string(),
        })
    }
}

/// Resolve `.` and `..` components in an absolute path.
///
/// A `..` at the root stays at the root, as it does on the filesystem.
///
/// # Examples
///
/// ```
/// use varlink::path::normalize::resolve_components;
/// use std::path::{Path, PathBuf};
///
/// let resolved = resolve_components(Path::new("/a/./b/../c"));
/// assert_eq!(resolved, PathBuf::from("/a/c"));
///
/// let resolved = resolve_components(Path::new("/a/../.."));
/// assert_eq!(resolved, PathBuf::from("/"));
/// ```
#[must_use]
pub fn resolve_components(path: &Path) -> PathBuf {
    let mut result = PathBuf::new();

    for component in path.components() {
        match component {
            Component::Prefix(prefix) => result.push(prefix.as_os_str()),
            Component::RootDir => result.push(component),
            Component::Normal(c) => result.push(c),
            Component::CurDir => {}
            Component::ParentDir => {
                // pop() on a bare root is a no-op
                result.pop();
            }
        }
    }

    result
}

/// Normalize a path to absolute form.
///
/// 1. Expands tilde (~) if present
/// 2. Converts relative paths to absolute (using current directory)
/// 3. Resolves `.` and `..` components
///
/// # Errors
///
/// Returns [`Error::PathResolution`] if tilde expansion fails or the current
/// directory cannot be determined (for example, it was deleted).
///
/// # Examples
///
/// ```no_run
/// use varlink::path::normalize::normalize;
/// use std::path::Path;
///
/// let normalized = normalize(Path::new("./environments/dev")).unwrap();
/// assert!(normalized.is_absolute());
/// ```
pub fn normalize(path: &Path) -> Result<PathBuf> {
    let expanded = expand_tilde(path)?;

    let absolute = if expanded.is_absolute() {
        expanded
    } else {
        let cwd = env::current_dir().map_err(|e| Error::PathResolution {
            path: path.to_path_buf(),
            reason: format!("cannot get current directory: {e}"),
        })?;
        cwd.join(expanded)
    };

    Ok(resolve_components(&absolute))
}
